use serde::{Deserialize, Serialize};

use combopt::probs::kp::generator::KPGenConfig;
use combopt::probs::ssp::generator::SSPGenConfig;
use combopt::probs::tsp::solvers::{ExactConfig, MAX_EXACT_CITIES};
use combopt::util::BasicTerminator;

/// Configuration of the explorer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Seed for the PRNG. If undefined, instances are generated from OS entropy
    pub prng_seed: Option<u64>,
    #[serde(default)]
    pub tsp: TSPConfig,
    /// Generator settings for knapsack instances
    #[serde(default)]
    pub kp: KPGenConfig,
    /// Generator settings for subset sum pools
    #[serde(default)]
    pub ssp: SSPGenConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            prng_seed: None,
            tsp: TSPConfig::default(),
            kp: KPGenConfig::default(),
            ssp: SSPGenConfig::default(),
        }
    }
}

/// Settings for generating and solving TSP instances
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TSPConfig {
    /// Number of cities in a generated instance, the depot included
    pub n_cities: usize,
    /// Cities are placed in the square `[coord_min, coord_max)²`
    pub coord_min: f64,
    pub coord_max: f64,
    /// Instances with more cities are refused by the exact solver
    pub max_exact_cities: usize,
    /// Time budget for the exact solver in milliseconds. If undefined, it runs to completion
    pub timeout_ms: Option<u64>,
}

impl TSPConfig {
    pub fn exact_config(&self) -> ExactConfig {
        ExactConfig {
            max_cities: self.max_exact_cities,
        }
    }

    pub fn terminator(&self) -> BasicTerminator {
        BasicTerminator::from_timeout_ms(self.timeout_ms)
    }
}

impl Default for TSPConfig {
    fn default() -> Self {
        Self {
            n_cities: 5,
            coord_min: -5.0,
            coord_max: 5.0,
            max_exact_cities: MAX_EXACT_CITIES,
            timeout_ms: None,
        }
    }
}
