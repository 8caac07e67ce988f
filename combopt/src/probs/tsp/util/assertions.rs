use crate::probs::tsp::entities::{TSPInstance, TSPSolution};
use crate::util::FPA;
use crate::util::assertions::distance_matrix_is_valid;

pub fn solution_matches_instance(sol: &TSPSolution, instance: &TSPInstance) -> bool {
    sol.route.is_valid(instance.n_cities())
        && FPA(sol.route.length(&instance.dist_matrix)) == FPA(sol.total_distance)
}

pub fn instance_is_consistent(instance: &TSPInstance) -> bool {
    instance.dist_matrix.len() == instance.n_cities()
        && distance_matrix_is_valid(&instance.dist_matrix)
}
