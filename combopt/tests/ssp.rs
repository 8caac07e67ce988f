#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use combopt::SolveError;
    use combopt::probs::ssp::entities::SSPInstance;
    use combopt::probs::ssp::generator::{
        Difficulty, SSPGenConfig, generate, generate_from_config, generate_with_witness,
    };
    use combopt::probs::ssp::io;
    use combopt::probs::ssp::io::ext_repr::ExtSSPInstance;
    use combopt::probs::ssp::util::assertions::is_solvable;
    use combopt::probs::ssp::verifier::verify_subset_sum;

    fn pool_5_10_15(target: u64) -> SSPInstance {
        SSPInstance::new(vec![5, 10, 15], target).unwrap()
    }

    #[test_case(&[2]; "fifteen alone")]
    #[test_case(&[0, 1]; "five and ten")]
    #[test_case(&[1, 0]; "order does not matter")]
    fn accepts_every_valid_selection(selection: &[usize]) {
        let verdict = verify_subset_sum(&pool_5_10_15(15), selection).unwrap();
        assert!(verdict.is_correct);
        assert_eq!(verdict.sum, 15);
    }

    #[test]
    fn rejects_a_wrong_sum_and_reports_it() {
        let verdict = verify_subset_sum(&pool_5_10_15(15), &[0, 2]).unwrap();
        assert!(!verdict.is_correct);
        assert_eq!(verdict.sum, 20);
    }

    #[test_case(0, true; "zero target")]
    #[test_case(5, false; "positive target")]
    fn empty_selection_is_correct_only_for_zero(target: u64, expected: bool) {
        let verdict = verify_subset_sum(&pool_5_10_15(target), &[]).unwrap();
        assert_eq!(verdict.is_correct, expected);
        assert_eq!(verdict.sum, 0);
    }

    #[test_case(&[3]; "out of bounds")]
    #[test_case(&[1, 1]; "duplicate index")]
    fn malformed_selection_is_invalid(selection: &[usize]) {
        assert!(matches!(
            verify_subset_sum(&pool_5_10_15(15), selection),
            Err(SolveError::InvalidInstance(_))
        ));
    }

    #[test]
    fn verdict_agrees_with_the_sum_for_every_subset() {
        let instance = SSPInstance::new(vec![3, 7, 1, 8, 4], 12).unwrap();
        for selection in (0..5).powerset() {
            let sum: u64 = selection.iter().map(|&i| instance.number(i)).sum();
            let verdict = verify_subset_sum(&instance, &selection).unwrap();
            assert_eq!(verdict.sum, sum);
            assert_eq!(verdict.is_correct, sum == 12);
        }
    }

    #[test]
    fn non_positive_pool_numbers_are_invalid() {
        assert!(SSPInstance::new(vec![4, 0, 2], 6).is_err());
        let ext = ExtSSPInstance {
            name: "zero".into(),
            pool: vec![0],
            target: 0,
        };
        assert!(io::import(&ext).is_err());
    }

    #[test_case(Difficulty::Easy; "easy")]
    #[test_case(Difficulty::Medium; "medium")]
    #[test_case(Difficulty::Hard; "hard")]
    #[test_case(Difficulty::Custom { count: 1, min: 1, max: 1 }; "single")]
    #[test_case(Difficulty::Custom { count: 20, min: 90, max: 100 }; "large numbers")]
    fn generated_instances_are_always_solvable(difficulty: Difficulty) {
        let (count, min, max) = difficulty.params();
        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..200 {
            let (instance, witness) =
                generate_from_config(&mut rng, &SSPGenConfig { difficulty }).unwrap();
            assert_eq!(instance.pool().len(), count);
            assert!(instance.pool().iter().all(|n| (min..=max).contains(n)));
            assert!(verify_subset_sum(&instance, &witness).unwrap().is_correct);
            assert!(is_solvable(&instance));
            assert!(instance.target() > 0);
        }
    }

    #[test]
    fn empty_pool_has_a_zero_target() {
        let mut rng = SmallRng::seed_from_u64(1);
        let (instance, witness) = generate_with_witness(&mut rng, 0, 1, 30).unwrap();
        assert!(instance.pool().is_empty());
        assert!(witness.is_empty());
        assert_eq!(instance.target(), 0);
        assert!(verify_subset_sum(&instance, &[]).unwrap().is_correct);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(generate(&mut rng, 5, 0, 10).is_err());
        assert!(generate(&mut rng, 5, 10, 3).is_err());
    }

    #[test]
    fn overflowing_target_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(4);
        let res = generate_with_witness(&mut rng, 64, u64::MAX / 2, u64::MAX / 2);
        assert!(matches!(res, Err(SolveError::InvalidInstance(_))));
    }

    #[test]
    fn huge_numbers_keep_the_witness_valid() {
        let mut rng = SmallRng::seed_from_u64(4);
        let (instance, witness) =
            generate_with_witness(&mut rng, 1, u64::MAX / 2, u64::MAX).unwrap();
        assert_eq!(witness, vec![0]);
        assert_eq!(instance.target(), instance.number(0));
        assert!(verify_subset_sum(&instance, &witness).unwrap().is_correct);
    }

    #[test]
    fn generator_is_reproducible_for_a_seed() {
        let a = generate(&mut SmallRng::seed_from_u64(8), 10, 1, 30).unwrap();
        let b = generate(&mut SmallRng::seed_from_u64(8), 10, 1, 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn solvability_check_detects_unreachable_targets() {
        assert!(is_solvable(&SSPInstance::new(vec![5, 10, 15], 25).unwrap()));
        assert!(!is_solvable(&SSPInstance::new(vec![5, 10, 15], 7).unwrap()));
        assert!(!is_solvable(&SSPInstance::new(vec![5, 10, 15], 31).unwrap()));
        assert!(is_solvable(&SSPInstance::new(vec![], 0).unwrap()));
    }

    #[test]
    fn verdict_export_keeps_the_selection() {
        let verdict = verify_subset_sum(&pool_5_10_15(15), &[0, 1]).unwrap();
        let ext = io::export(&[0, 1], &verdict);
        assert_eq!(ext.selection, vec![0, 1]);
        assert!(ext.is_correct);
        assert_eq!(ext.sum, 15);
    }
}
