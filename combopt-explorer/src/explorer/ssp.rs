use std::path::Path;

use anyhow::{Result, bail};
use log::{info, warn};
use rand::Rng;

use combopt::probs::ssp;
use combopt::probs::ssp::generator::SSPGenConfig;
use combopt::probs::ssp::io::ext_repr::ExtSSPInstance;
use combopt::probs::ssp::verifier::verify_subset_sum;

use crate::config::ExplorerConfig;
use crate::explorer::log_instance;
use crate::io;
use crate::io::output::SSPOutput;

/// A pool to verify selections against, with the generator's witness if it was generated
#[derive(Debug, Clone)]
pub struct SSPPuzzle {
    pub instance: ExtSSPInstance,
    pub witness: Option<Vec<usize>>,
}

pub fn load_or_generate(
    input_file: Option<&Path>,
    config: &SSPGenConfig,
    rng: &mut impl Rng,
) -> Result<SSPPuzzle> {
    match input_file {
        Some(path) => Ok(SSPPuzzle {
            instance: io::read_json(path)?,
            witness: None,
        }),
        None => {
            let (instance, witness) = ssp::generator::generate_from_config(rng, config)?;
            Ok(SSPPuzzle {
                instance: ssp::io::export_instance(&instance, "generated_ssp"),
                witness: Some(witness),
            })
        }
    }
}

/// Verifies `selection`, falling back to the generator's witness when none is given
pub fn explore(
    puzzle: SSPPuzzle,
    selection: Option<Vec<usize>>,
    config: ExplorerConfig,
) -> Result<SSPOutput> {
    let instance = ssp::io::import(&puzzle.instance)?;
    log_instance(&instance);
    let selection = match (selection, puzzle.witness) {
        (Some(selection), _) => selection,
        (None, Some(witness)) => {
            warn!("[EXPLORER] no selection provided, verifying the generator's witness");
            witness
        }
        (None, None) => bail!("no selection to verify, use --selection to provide one"),
    };

    let verdict = verify_subset_sum(&instance, &selection)?;
    info!(
        "[EXPLORER] selection sums to {} against target {}",
        verdict.sum,
        instance.target()
    );

    Ok(SSPOutput {
        instance: puzzle.instance,
        verdict: ssp::io::export(&selection, &verdict),
        config,
    })
}
