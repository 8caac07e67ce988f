use crate::probs::ssp::entities::{SSPInstance, SSPVerdict};
use crate::probs::ssp::io::ext_repr::{ExtSSPInstance, ExtSSPVerdict};

/// Exports a verdict out of the library
pub fn export(selection: &[usize], verdict: &SSPVerdict) -> ExtSSPVerdict {
    ExtSSPVerdict {
        selection: selection.to_vec(),
        sum: verdict.sum,
        is_correct: verdict.is_correct,
    }
}

/// Exports an instance, used to persist generated instances
pub fn export_instance(instance: &SSPInstance, name: &str) -> ExtSSPInstance {
    ExtSSPInstance {
        name: name.to_string(),
        pool: instance.pool().to_vec(),
        target: instance.target(),
    }
}
