use crate::probs::kp::entities::{KPInstance, KPSolution};
use crate::probs::kp::io::ext_repr::{ExtKPInstance, ExtKPItem, ExtKPSolution};

/// Exports a solution out of the library
pub fn export(solution: &KPSolution) -> ExtKPSolution {
    ExtKPSolution {
        selected_items: solution.selected_items.clone(),
        total_value: solution.total_value,
        total_weight: solution.total_weight,
        elapsed_ms: solution.elapsed_ms,
    }
}

/// Exports an instance, used to persist generated instances
pub fn export_instance(instance: &KPInstance, name: &str) -> ExtKPInstance {
    ExtKPInstance {
        name: name.to_string(),
        items: instance
            .items
            .iter()
            .map(|i| ExtKPItem {
                weight: i.weight,
                value: i.value,
            })
            .collect(),
        capacity: instance.capacity,
    }
}
