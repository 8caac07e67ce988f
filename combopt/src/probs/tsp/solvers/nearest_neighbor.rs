use log::info;

use crate::error::ensure_valid;
use crate::probs::tsp::entities::{DEPOT, Route, TSPInstance, TSPSolution};
use crate::probs::tsp::solvers::TSPAlgorithm;
use crate::probs::tsp::util::assertions;
use crate::{Instant, Result};

/// Builds a tour by starting at the depot and repeatedly moving to the closest unvisited city.
/// O(n²) time, O(n) space, no optimality guarantee.
///
/// Ties are broken by lowest city index: a candidate only replaces the current nearest if it is strictly closer.
pub fn solve_nearest_neighbor(instance: &TSPInstance) -> Result<TSPSolution> {
    let start = Instant::now();
    let n = instance.n_cities();
    ensure_valid!(n >= 1, "a TSP instance needs at least one city (the depot)");
    ensure_valid!(
        assertions::instance_is_consistent(instance),
        "distances between the cities are not finite and symmetric"
    );

    let dm = &instance.dist_matrix;
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n + 1);
    let mut current = DEPOT;
    visited[current] = true;
    path.push(current);

    for _ in 1..n {
        let mut nearest: Option<(usize, f64)> = None;
        for (city, dist) in dm.row(current).enumerate() {
            if visited[city] {
                continue;
            }
            match nearest {
                Some((_, nearest_dist)) if dist >= nearest_dist => {}
                _ => nearest = Some((city, dist)),
            }
        }
        let Some((next, _)) = nearest else { break };
        visited[next] = true;
        path.push(next);
        current = next;
    }
    path.push(DEPOT);

    let route = Route::from_raw(path);
    debug_assert!(route.is_valid(n));
    let solution = TSPSolution {
        total_distance: route.length(dm),
        route,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        algorithm: TSPAlgorithm::NearestNeighbor,
    };
    debug_assert!(assertions::solution_matches_instance(&solution, instance));

    info!(
        "[TSP-NN] tour {} of length {:.4} ({:.3}ms)",
        solution.route, solution.total_distance, solution.elapsed_ms
    );
    Ok(solution)
}
