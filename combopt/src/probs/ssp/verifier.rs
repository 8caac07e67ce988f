use log::info;

use crate::{Result, SolveError};
use crate::error::ensure_valid;
use crate::probs::ssp::entities::{SSPInstance, SSPVerdict};

/// Checks whether the numbers at the selected pool indices sum exactly to the target. O(k) for k selected indices.
///
/// Indices outside the pool and repeated indices are rejected, a selection being a subset of the pool.
/// This only verifies a proposed selection, it does not search for one.
pub fn verify_subset_sum(instance: &SSPInstance, selection: &[usize]) -> Result<SSPVerdict> {
    let n = instance.pool().len();
    let mut used = vec![false; n];
    let mut sum = 0u64;
    for &id in selection {
        ensure_valid!(id < n, "selection index {id} is outside the pool of {n} numbers");
        ensure_valid!(!used[id], "selection index {id} is used more than once");
        used[id] = true;
        let Some(next) = sum.checked_add(instance.number(id)) else {
            return Err(SolveError::invalid_instance("sum of the selection overflows"));
        };
        sum = next;
    }

    let verdict = SSPVerdict {
        is_correct: sum == instance.target(),
        sum,
    };
    info!(
        "[SSP] selection of {} numbers sums to {} (target {}): {}",
        selection.len(),
        verdict.sum,
        instance.target(),
        if verdict.is_correct { "correct" } else { "incorrect" }
    );
    Ok(verdict)
}
