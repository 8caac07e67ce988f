#[cfg(test)]
mod tests {
    use std::time::Duration;

    use itertools::Itertools;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use combopt::SolveError;
    use combopt::geometry::{DistanceMatrix, Point};
    use combopt::probs::tsp::entities::{Route, TSPInstance};
    use combopt::probs::tsp::generator::generate_instance;
    use combopt::probs::tsp::io::ext_repr::{ExtCity, ExtTSPInstance};
    use combopt::probs::tsp::solvers::{
        ExactConfig, TSPAlgorithm, solve, solve_exact, solve_nearest_neighbor,
    };
    use combopt::probs::tsp::{io, util::assertions};
    use combopt::util::assertions::not_worse;
    use combopt::util::{BasicTerminator, NoTerminator};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    /// Minimum over every closed tour through the depot, computed independently of the solver
    fn brute_force_min(instance: &TSPInstance) -> f64 {
        let n = instance.n_cities();
        (1..n)
            .permutations(n - 1)
            .map(|order| Route::closed(&order).length(&instance.dist_matrix))
            .fold(f64::INFINITY, f64::min)
    }

    fn triangle() -> TSPInstance {
        TSPInstance::new(vec![Point(0.0, 0.0), Point(3.0, 0.0), Point(3.0, 4.0)])
    }

    #[test]
    fn exact_solves_the_3_4_5_triangle() {
        init_logger();
        let instance = triangle();
        assert!(assertions::instance_is_consistent(&instance));
        let sol = solve_exact(&instance, ExactConfig::default(), &NoTerminator).unwrap();
        //both directions have length 12, the lexicographically first one wins
        assert_eq!(sol.route.indices(), &[0, 1, 2, 0]);
        assert_eq!(sol.total_distance, 12.0);
        assert_eq!(sol.algorithm, TSPAlgorithm::Exact);
        assert!(sol.elapsed_ms >= 0.0);
    }

    #[test_case(1; "one")]
    #[test_case(2; "two")]
    #[test_case(4; "four")]
    #[test_case(6; "six")]
    #[test_case(8; "eight")]
    fn exact_matches_brute_force(n_cities: usize) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(n_cities as u64);
        for _ in 0..5 {
            let instance = generate_instance(&mut rng, n_cities, -5.0, 5.0).unwrap();
            let sol = solve_exact(&instance, ExactConfig::default(), &NoTerminator).unwrap();
            assert!(assertions::solution_matches_instance(&sol, &instance));
            let reference = brute_force_min(&instance);
            float_cmp::assert_approx_eq!(f64, sol.total_distance, reference, epsilon = 1e-9);
        }
    }

    #[test_case(2; "two")]
    #[test_case(5; "five")]
    #[test_case(8; "eight")]
    fn nearest_neighbor_is_valid_and_never_beats_exact(n_cities: usize) {
        let mut rng = SmallRng::seed_from_u64(42 + n_cities as u64);
        for _ in 0..10 {
            let instance = generate_instance(&mut rng, n_cities, -5.0, 5.0).unwrap();
            let nn = solve_nearest_neighbor(&instance).unwrap();
            let exact = solve_exact(&instance, ExactConfig::default(), &NoTerminator).unwrap();
            assert!(nn.route.is_valid(n_cities));
            assert!(assertions::solution_matches_instance(&nn, &instance));
            assert!(not_worse(exact.total_distance, nn.total_distance));
        }
    }

    #[test]
    fn single_city_yields_the_trivial_route() {
        let instance = TSPInstance::new(vec![Point(1.0, 1.0)]);
        for algorithm in [TSPAlgorithm::Exact, TSPAlgorithm::NearestNeighbor] {
            let sol = solve(&instance, algorithm, ExactConfig::default(), &NoTerminator).unwrap();
            assert_eq!(sol.route.indices(), &[0, 0]);
            assert_eq!(sol.total_distance, 0.0);
        }
    }

    #[test]
    fn empty_instance_is_invalid() {
        let instance = TSPInstance::new(vec![]);
        assert!(matches!(
            solve_exact(&instance, ExactConfig::default(), &NoTerminator),
            Err(SolveError::InvalidInstance(_))
        ));
        assert!(matches!(
            solve_nearest_neighbor(&instance),
            Err(SolveError::InvalidInstance(_))
        ));
    }

    #[test]
    fn exact_rejects_instances_above_the_limit() {
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = generate_instance(&mut rng, 11, 0.0, 1.0).unwrap();
        let res = solve_exact(&instance, ExactConfig::default(), &NoTerminator);
        assert!(matches!(res, Err(SolveError::InvalidInstance(_))));

        let small_limit = ExactConfig { max_cities: 3 };
        let res = solve_exact(&triangle(), small_limit, &NoTerminator);
        assert!(res.is_ok());
    }

    #[test]
    fn exact_honours_the_terminator() {
        let mut rng = SmallRng::seed_from_u64(7);
        let instance = generate_instance(&mut rng, 9, 0.0, 1.0).unwrap();

        let expired = BasicTerminator::with_timeout(Duration::ZERO);
        let res = solve_exact(&instance, ExactConfig::default(), &expired);
        assert_eq!(res, Err(SolveError::Terminated { evaluated: 0 }));

        let interrupted = BasicTerminator::new();
        interrupted.interrupt();
        let res = solve_exact(&instance, ExactConfig::default(), &interrupted);
        assert!(matches!(res, Err(SolveError::Terminated { .. })));
    }

    #[test]
    fn nearest_neighbor_breaks_ties_by_lowest_index() {
        //cities 1 and 2 are equidistant from the depot
        let instance = TSPInstance::new(vec![
            Point(0.0, 0.0),
            Point(0.0, 1.0),
            Point(1.0, 0.0),
            Point(5.0, 5.0),
        ]);
        let sol = solve_nearest_neighbor(&instance).unwrap();
        assert_eq!(sol.route.indices(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn nearest_neighbor_can_be_suboptimal() {
        let instance = TSPInstance::new(vec![
            Point(0.0, 0.0),
            Point(3.0, -3.0),
            Point(2.0, 0.0),
            Point(-1.0, 2.0),
            Point(3.0, -2.0),
        ]);
        let nn = solve_nearest_neighbor(&instance).unwrap();
        let exact = solve_exact(&instance, ExactConfig::default(), &NoTerminator).unwrap();
        assert_eq!(nn.route.indices(), &[0, 2, 4, 1, 3, 0]);
        assert!(
            exact.route.indices() == [0, 1, 4, 2, 3, 0]
                || exact.route.indices() == [0, 3, 2, 4, 1, 0]
        );
        assert!(nn.total_distance > exact.total_distance + 0.5);
    }

    #[test]
    fn precomputed_matrix_must_match_the_cities() {
        let cities = vec![Point(0.0, 0.0), Point(1.0, 0.0)];
        let dm = DistanceMatrix::from_points(&cities[..1]);
        assert!(TSPInstance::with_distance_matrix(cities.clone(), dm).is_err());
        let dm = DistanceMatrix::from_points(&cities);
        assert!(TSPInstance::with_distance_matrix(cities, dm).is_ok());
    }

    #[test]
    fn asymmetric_precomputed_matrix_is_rejected() {
        let matrix = Array2::from(vec![[0.0, 1.0], [2.0, 0.0]]);
        assert!(DistanceMatrix::from_array(matrix).is_err());
    }

    #[test]
    fn non_finite_distances_are_invalid_for_both_solvers() {
        let instance = TSPInstance::new(vec![
            Point(0.0, 0.0),
            Point(f64::NAN, 1.0),
            Point(2.0, 2.0),
        ]);
        assert!(matches!(
            solve_exact(&instance, ExactConfig::default(), &NoTerminator),
            Err(SolveError::InvalidInstance(_))
        ));
        assert!(matches!(
            solve_nearest_neighbor(&instance),
            Err(SolveError::InvalidInstance(_))
        ));
    }

    #[test]
    fn generated_cities_stay_inside_the_square() {
        let mut rng = SmallRng::seed_from_u64(3);
        let instance = generate_instance(&mut rng, 50, -5.0, 5.0).unwrap();
        assert_eq!(instance.n_cities(), 50);
        assert!(instance
            .cities
            .iter()
            .all(|c| (-5.0..5.0).contains(&c.x()) && (-5.0..5.0).contains(&c.y())));
        assert!(generate_instance(&mut rng, 5, 1.0, 1.0).is_err());
    }

    #[test]
    fn generator_is_reproducible_for_a_seed() {
        let a = generate_instance(&mut SmallRng::seed_from_u64(11), 6, -5.0, 5.0).unwrap();
        let b = generate_instance(&mut SmallRng::seed_from_u64(11), 6, -5.0, 5.0).unwrap();
        assert_eq!(a.cities, b.cities);
    }

    #[test]
    fn import_rejects_non_finite_coordinates() {
        let ext = ExtTSPInstance {
            name: "nan".into(),
            cities: vec![ExtCity { x: 0.0, y: 0.0 }, ExtCity { x: f64::NAN, y: 1.0 }],
        };
        assert!(io::import(&ext).is_err());

        let instance = triangle();
        let exported = io::export_instance(&instance, "triangle");
        let reimported = io::import(&exported).unwrap();
        assert_eq!(reimported.cities, instance.cities);
    }
}
