use log::info;

use crate::probs::kp::DPTable;
use crate::probs::kp::entities::{KPInstance, KPSolution};
use crate::probs::kp::util::assertions;
use crate::{Instant, Result, SolveError};

/// Solves the 0/1 knapsack instance to optimality with a two-pass dynamic program
/// (forward fill of the [`DPTable`], backward reconstruction of the selected items).
///
/// Runs in O(n·W) time and space, where W is the capacity. Instances whose table would be
/// larger than [`MAX_DP_CELLS`](crate::probs::kp::MAX_DP_CELLS) are rejected.
/// When several subsets are optimal, the one favoured by the backward scan is returned:
/// an item is only included when the DP value strictly requires it.
pub fn solve_knapsack(instance: &KPInstance) -> Result<KPSolution> {
    let start = Instant::now();
    instance.validate()?;

    let Ok(capacity) = usize::try_from(instance.capacity) else {
        return Err(SolveError::invalid_instance(format!(
            "capacity {} does not fit in memory",
            instance.capacity
        )));
    };

    let dp = DPTable::fill(&instance.items, capacity)?;
    let selected_items = dp.reconstruct(&instance.items);
    let Some((total_weight, total_value)) = instance.totals(&selected_items) else {
        return Err(SolveError::invalid_instance("totals of the selection overflow"));
    };
    debug_assert_eq!(total_value, dp.optimal_value());

    let solution = KPSolution {
        selected_items,
        total_value,
        total_weight,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    debug_assert!(assertions::solution_matches_instance(&solution, instance));

    info!(
        "[KP-DP] selected {}/{} items, value {} and weight {}/{} ({:.3}ms)",
        solution.selected_items.len(),
        instance.n_items(),
        solution.total_value,
        solution.total_weight,
        instance.capacity,
        solution.elapsed_ms
    );
    Ok(solution)
}
