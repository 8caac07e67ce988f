use itertools::Itertools;

use crate::probs::kp::entities::{KPInstance, KPSolution};

pub fn solution_matches_instance(sol: &KPSolution, instance: &KPInstance) -> bool {
    let ids_valid = sol.selected_items.iter().all(|&i| i < instance.n_items())
        && sol.selected_items.iter().tuple_windows().all(|(a, b)| a < b);
    if !ids_valid {
        return false;
    }
    let Some((weight, value)) = instance.totals(&sol.selected_items) else {
        return false;
    };
    weight == sol.total_weight && value == sol.total_value && weight <= instance.capacity
}
