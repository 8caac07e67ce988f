use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use log::info;
use rand::Rng;

use combopt::probs::kp;
use combopt::probs::kp::generator::KPGenConfig;
use combopt::probs::kp::io::ext_repr::ExtKPInstance;

use crate::config::ExplorerConfig;
use crate::explorer::log_instance;
use crate::io;
use crate::io::output::KPOutput;

pub fn load_or_generate(
    input_file: Option<&Path>,
    config: &KPGenConfig,
    rng: &mut impl Rng,
) -> Result<ExtKPInstance> {
    match input_file {
        Some(path) => io::read_json(path),
        None => {
            let instance = kp::generator::generate(rng, config)?;
            Ok(kp::io::export_instance(&instance, "generated_kp"))
        }
    }
}

pub fn explore(ext_instance: ExtKPInstance, config: ExplorerConfig) -> Result<KPOutput> {
    let instance = kp::io::import(&ext_instance)?;
    log_instance(&instance);
    let solution = kp::solver::solve_knapsack(&instance)?;

    info!(
        "[EXPLORER] packed items [{}] into capacity {}",
        solution.selected_items.iter().join(", "),
        instance.capacity
    );

    Ok(KPOutput {
        instance: ext_instance,
        solution: kp::io::export(&solution),
        config,
    })
}
