use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::entities::Instance as _;
use crate::error::ensure_valid;
use crate::geometry::DistanceMatrix;
use crate::probs::tsp::entities::{DEPOT, Route, TSPInstance, TSPSolution};
use crate::probs::tsp::solvers::{Permutations, TSPAlgorithm};
use crate::probs::tsp::util::assertions;
use crate::util::Terminator;
use crate::{Instant, Result, SolveError};

/// Largest instance the exact solver accepts by default: (10-1)! = 362,880 permutations
pub const MAX_EXACT_CITIES: usize = 10;

/// Number of evaluated permutations between two consultations of the terminator
const TERMINATOR_POLL_INTERVAL: u64 = 1024;

/// Configuration of the brute-force solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactConfig {
    /// Instances with more cities are rejected before the search starts
    pub max_cities: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            max_cities: MAX_EXACT_CITIES,
        }
    }
}

/// Finds the minimum length Hamiltonian cycle through the depot by enumerating
/// all (n-1)! orders of the remaining cities. Cost is O(n!·n).
///
/// Ties are broken by enumeration order: the lexicographically first optimal order wins.
/// Instances above [`ExactConfig::max_cities`] are rejected as invalid.
pub fn solve_exact(
    instance: &TSPInstance,
    config: ExactConfig,
    terminator: &impl Terminator,
) -> Result<TSPSolution> {
    let start = Instant::now();
    let n = instance.n_cities();
    ensure_valid!(n >= 1, "a TSP instance needs at least one city (the depot)");
    ensure_valid!(
        assertions::instance_is_consistent(instance),
        "distances between the cities are not finite and symmetric"
    );
    ensure_valid!(
        n <= config.max_cities,
        "{n} cities exceed the exact solver limit of {} cities",
        config.max_cities
    );

    let dm = &instance.dist_matrix;
    let mut permutations = Permutations::new((1..n).collect());
    info!(
        "[TSP-EXACT] enumerating {} permutations of {} cities",
        permutations.n_total(),
        instance.n_elements()
    );

    let mut best_order: Vec<usize> = (1..n).collect();
    let mut best_distance = f64::INFINITY;
    let mut evaluated = 0u64;

    while let Some(order) = permutations.next_slice() {
        if evaluated % TERMINATOR_POLL_INTERVAL == 0 && terminator.kill() {
            warn!("[TSP-EXACT] terminated after {evaluated} permutations");
            return Err(SolveError::Terminated { evaluated });
        }
        let distance = closed_tour_length(dm, order);
        evaluated += 1;
        if distance < best_distance {
            debug!("[TSP-EXACT] [{evaluated}] better: {distance:.4}");
            best_distance = distance;
            best_order.copy_from_slice(order);
        }
    }

    let route = Route::closed(&best_order);
    debug_assert!(route.is_valid(n));
    let solution = TSPSolution {
        route,
        total_distance: best_distance,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        algorithm: TSPAlgorithm::Exact,
    };
    debug_assert!(assertions::solution_matches_instance(&solution, instance));

    info!(
        "[TSP-EXACT] optimal tour {} of length {:.4} ({evaluated} permutations in {:.3}ms)",
        solution.route, solution.total_distance, solution.elapsed_ms
    );
    Ok(solution)
}

/// Length of `[0, order.., 0]`, summed from the depot onward
fn closed_tour_length(dm: &DistanceMatrix, order: &[usize]) -> f64 {
    let mut prev = DEPOT;
    let mut total = 0.0;
    for &city in order {
        total += dm.get(prev, city);
        prev = city;
    }
    total + dm.get(prev, DEPOT)
}
