use std::path::Path;

use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use thousands::Separable;

use combopt::probs::tsp;
use combopt::probs::tsp::entities::{TSPInstance, TSPSolution};
use combopt::probs::tsp::io::ext_repr::ExtTSPInstance;
use combopt::probs::tsp::solvers::{Permutations, solve_exact, solve_nearest_neighbor};

use crate::config::{ExplorerConfig, TSPConfig};
use crate::explorer::log_instance;
use crate::io;
use crate::io::cli::AlgorithmChoice;
use crate::io::output::TSPOutput;

/// Routes computed for one instance
#[derive(Debug, Clone, Default)]
pub struct TSPComparison {
    pub exact: Option<TSPSolution>,
    pub nearest_neighbor: Option<TSPSolution>,
}

impl TSPComparison {
    /// `(nn - exact) / exact`, defined when both routes exist and the optimum has positive length
    pub fn gap(&self) -> Option<f64> {
        match (&self.exact, &self.nearest_neighbor) {
            (Some(exact), Some(nn)) if exact.total_distance > 0.0 => {
                Some((nn.total_distance - exact.total_distance) / exact.total_distance)
            }
            _ => None,
        }
    }

    pub fn solutions(&self) -> impl Iterator<Item = &TSPSolution> {
        self.exact.iter().chain(self.nearest_neighbor.iter())
    }
}

pub fn load_or_generate(
    input_file: Option<&Path>,
    config: &TSPConfig,
    rng: &mut impl Rng,
) -> Result<ExtTSPInstance> {
    match input_file {
        Some(path) => io::read_json(path),
        None => {
            let instance = tsp::generator::generate_instance(
                rng,
                config.n_cities,
                config.coord_min,
                config.coord_max,
            )?;
            Ok(tsp::io::export_instance(&instance, "generated_tsp"))
        }
    }
}

/// Runs the chosen solvers on the instance.
/// With [`AlgorithmChoice::Both`], instances too large for the exact solver fall back to nearest-neighbor only.
pub fn compare(
    instance: &TSPInstance,
    choice: AlgorithmChoice,
    config: &TSPConfig,
) -> Result<TSPComparison> {
    let too_large = instance.n_cities() > config.max_exact_cities;
    let run_exact = match choice {
        AlgorithmChoice::Both if too_large => {
            warn!(
                "[EXPLORER] {} cities exceed the exact solver limit of {}, only the nearest-neighbor route is computed",
                instance.n_cities(),
                config.max_exact_cities
            );
            false
        }
        _ => choice.runs_exact(),
    };
    if run_exact && !too_large {
        let n_routes = Permutations::new((1..instance.n_cities()).collect()).n_total();
        info!(
            "[EXPLORER] exact search over {} routes",
            n_routes.separate_with_commas()
        );
    }
    let exact = run_exact
        .then(|| solve_exact(instance, config.exact_config(), &config.terminator()))
        .transpose()?;
    let nearest_neighbor = choice
        .runs_nearest_neighbor()
        .then(|| solve_nearest_neighbor(instance))
        .transpose()?;
    let comparison = TSPComparison {
        exact,
        nearest_neighbor,
    };

    if let Some(gap) = comparison.gap() {
        info!(
            "[EXPLORER] nearest-neighbor route is {:.2}% longer than the optimum",
            gap * 100.0
        );
    }
    Ok(comparison)
}

pub fn explore(
    ext_instance: ExtTSPInstance,
    choice: AlgorithmChoice,
    config: ExplorerConfig,
) -> Result<TSPOutput> {
    let instance = tsp::io::import(&ext_instance)?;
    log_instance(&instance);
    let comparison = compare(&instance, choice, &config.tsp)?;

    Ok(TSPOutput {
        instance: ext_instance,
        solutions: comparison.solutions().map(tsp::io::export).collect(),
        gap: comparison.gap(),
        config,
    })
}
