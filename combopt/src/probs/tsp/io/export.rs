use crate::probs::tsp::entities::{TSPInstance, TSPSolution};
use crate::probs::tsp::io::ext_repr::{ExtCity, ExtTSPInstance, ExtTSPSolution};

/// Exports a solution out of the library
pub fn export(solution: &TSPSolution) -> ExtTSPSolution {
    ExtTSPSolution {
        algorithm: solution.algorithm,
        route: solution.route.indices().to_vec(),
        total_distance: solution.total_distance,
        elapsed_ms: solution.elapsed_ms,
    }
}

/// Exports an instance, used to persist generated instances
pub fn export_instance(instance: &TSPInstance, name: &str) -> ExtTSPInstance {
    ExtTSPInstance {
        name: name.to_string(),
        cities: instance
            .cities
            .iter()
            .map(|c| ExtCity { x: c.x(), y: c.y() })
            .collect(),
    }
}
