mod exact;
mod nearest_neighbor;
mod permutations;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::probs::tsp::entities::{TSPInstance, TSPSolution};
use crate::util::Terminator;

#[doc(inline)]
pub use exact::{ExactConfig, MAX_EXACT_CITIES, solve_exact};
#[doc(inline)]
pub use nearest_neighbor::solve_nearest_neighbor;
#[doc(inline)]
pub use permutations::Permutations;

/// The available tour construction algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TSPAlgorithm {
    /// Enumerates every Hamiltonian cycle through the depot, globally optimal
    Exact,
    /// Greedily extends the tour to the closest unvisited city, no optimality guarantee
    NearestNeighbor,
}

impl TSPAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            TSPAlgorithm::Exact => "exact",
            TSPAlgorithm::NearestNeighbor => "nearest-neighbor",
        }
    }
}

/// Runs the requested algorithm on the instance.
/// The terminator is only consulted by [`TSPAlgorithm::Exact`].
pub fn solve(
    instance: &TSPInstance,
    algorithm: TSPAlgorithm,
    exact_config: ExactConfig,
    terminator: &impl Terminator,
) -> Result<TSPSolution> {
    match algorithm {
        TSPAlgorithm::Exact => solve_exact(instance, exact_config, terminator),
        TSPAlgorithm::NearestNeighbor => solve_nearest_neighbor(instance),
    }
}
