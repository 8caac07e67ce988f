use serde::{Deserialize, Serialize};

use crate::probs::tsp::solvers::TSPAlgorithm;

/// External representation of a [`City`](crate::probs::tsp::entities::City)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCity {
    pub x: f64,
    pub y: f64,
}

/// Travelling Salesman Problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTSPInstance {
    /// The name of the instance
    pub name: String,
    /// The cities, the first one being the depot
    pub cities: Vec<ExtCity>,
}

/// Travelling Salesman Problem solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTSPSolution {
    /// Algorithm that produced the route
    pub algorithm: TSPAlgorithm,
    /// Indices of the cities in visiting order, starting and ending at the depot
    pub route: Vec<usize>,
    /// Sum of the edge lengths along the route
    pub total_distance: f64,
    /// The time it took to compute the route in milliseconds
    pub elapsed_ms: f64,
}
