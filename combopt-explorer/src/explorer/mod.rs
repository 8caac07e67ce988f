use std::path::Path;

use anyhow::{Context, Result};
use combopt::entities::Instance;
use log::info;
use rand::SeedableRng;
use rand::prelude::SmallRng;

/// Generation, solving and reporting of knapsack instances
pub mod kp;
/// Generation and verification of subset sum pools
pub mod ssp;
/// Generation, solving and comparison of TSP instances
pub mod tsp;

pub fn create_rng(prng_seed: Option<u64>) -> SmallRng {
    match prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Name used for the solution file: the stem of the input file, or `generated_<variant>` for generated instances
pub fn instance_stem(input_file: Option<&Path>, variant: &str) -> Result<String> {
    match input_file {
        Some(path) => path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .with_context(|| format!("invalid input file name: {}", path.display())),
        None => Ok(format!("generated_{variant}")),
    }
}

fn log_instance(instance: &impl Instance) {
    info!(
        "[EXPLORER] {} instance with {} elements",
        instance.variant(),
        instance.n_elements()
    );
}
