use crate::probs::tsp::entities::Route;
use crate::probs::tsp::solvers::TSPAlgorithm;

/// Tour produced by one of the TSP solvers
#[derive(Debug, Clone, PartialEq)]
pub struct TSPSolution {
    pub route: Route,
    pub total_distance: f64,
    /// Wall-clock computation time in milliseconds
    pub elapsed_ms: f64,
    pub algorithm: TSPAlgorithm,
}
