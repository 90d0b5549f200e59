#[cfg(test)]
mod redundant_solver {
    use crate::convert::matrix::{
        euler_to_rotation_matrix, quaternion_to_rotation_matrix, rotation_y,
    };
    use crate::convert::EulerAngles;
    use crate::generator::Generator;
    use crate::gimbal::{
        safety_metric, GimbalState, RedundantGimbalSolver, SolverConfig, SolverError,
    };
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_PI_2;
    use nalgebra::{Matrix3, Rotation3, Vector3};

    const EPS: f64 = 1e-12;

    fn near_lock_target() -> Matrix3<f64> {
        euler_to_rotation_matrix(&EulerAngles::new(0.3, FRAC_PI_2 - 0.05, -0.4))
    }

    fn solver(config: SolverConfig<f64>) -> RedundantGimbalSolver<f64> {
        RedundantGimbalSolver::new(config).expect("valid solver config")
    }

    #[test]
    fn default_config_values() {
        let config = SolverConfig::<f64>::default();
        assert_eq!(config.sample_count, 50);
        assert_abs_diff_eq!(config.search_half_width, 0.1, epsilon = EPS);
        assert_abs_diff_eq!(config.speed_weight, 1.0, epsilon = EPS);
        assert_eq!(RedundantGimbalSolver::<f64>::default().config(), &config);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let base = SolverConfig::<f64>::default();
        assert_eq!(
            RedundantGimbalSolver::new(base.with_sample_count(0)),
            Err(SolverError::ZeroSamples)
        );
        assert_eq!(
            RedundantGimbalSolver::new(base.with_search_half_width(-0.1)),
            Err(SolverError::InvalidSearchWidth)
        );
        assert_eq!(
            RedundantGimbalSolver::new(base.with_search_half_width(f64::NAN)),
            Err(SolverError::InvalidSearchWidth)
        );
        assert_eq!(
            RedundantGimbalSolver::new(base.with_speed_weight(f64::INFINITY)),
            Err(SolverError::InvalidSpeedWeight)
        );
        assert!(RedundantGimbalSolver::new(base.with_speed_weight(0.0)).is_ok());
    }

    #[test]
    fn candidates_span_symmetric_window() {
        let solver = solver(
            SolverConfig::default()
                .with_sample_count(5)
                .with_search_half_width(0.2),
        );
        let deltas: Vec<f64> = solver.candidate_deltas(1.0).collect();
        let expected = [0.8, 0.9, 1.0, 1.1, 1.2];
        assert_eq!(deltas.len(), expected.len());
        for (got, want) in deltas.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = EPS);
        }

        let single = solver_with_one_sample();
        assert_eq!(single.candidate_deltas(0.7).collect::<Vec<_>>(), vec![0.7]);
    }

    fn solver_with_one_sample() -> RedundantGimbalSolver<f64> {
        solver(SolverConfig::default().with_sample_count(1))
    }

    #[test]
    fn single_sample_keeps_previous_delta() {
        let previous = GimbalState::new(0.0, 0.0, 0.0, 0.35);
        let next = solver_with_one_sample().solve(&previous, &near_lock_target());
        assert_eq!(next.delta, 0.35);
    }

    #[test]
    fn solution_reproduces_target_rotation() {
        let target = near_lock_target();
        let next = RedundantGimbalSolver::default().solve(&GimbalState::zero(), &target);
        let rebuilt = next.principal_matrix() * rotation_y(next.delta);
        assert_abs_diff_eq!(rebuilt, target, epsilon = 1e-9);
    }

    /// Safety metric rebuilt from nalgebra rotations, independent of the solver's helpers.
    fn reference_safety(target: &Matrix3<f64>, delta: f64) -> (f64, f64) {
        let reduced = target * Rotation3::from_axis_angle(&Vector3::y_axis(), -delta).matrix();
        let (gamma, beta, alpha) = Rotation3::from_matrix_unchecked(reduced).euler_angles();

        let outer = Rotation3::from_axis_angle(&Vector3::z_axis(), alpha);
        let middle = outer * Rotation3::from_axis_angle(&Vector3::y_axis(), beta);
        let inner = middle * Rotation3::from_axis_angle(&Vector3::x_axis(), gamma);
        let axes = [
            Vector3::z(),
            outer * Vector3::y(),
            middle * Vector3::x(),
            inner * Vector3::z(),
        ];
        let m = axes
            .iter()
            .fold(Matrix3::zeros(), |m, a| m + a * a.transpose());
        (m.determinant(), delta)
    }

    #[test]
    fn zero_speed_weight_matches_brute_force_argmax() {
        let count = 41;
        let half_width = 0.1;
        let solver = solver(
            SolverConfig::default()
                .with_sample_count(count)
                .with_search_half_width(half_width)
                .with_speed_weight(0.0),
        );
        let target = near_lock_target();
        let mut state = GimbalState::zero();

        for _ in 0..30 {
            let mut best = (f64::NEG_INFINITY, state.delta);
            for i in 0..count {
                let fraction = i as f64 / (count - 1) as f64;
                let offset = half_width * (2.0 * fraction - 1.0);
                let scored = reference_safety(&target, state.delta + offset);
                if scored.0 > best.0 {
                    best = scored;
                }
            }

            let next = solver.solve(&state, &target);
            assert_abs_diff_eq!(next.delta, best.1, epsilon = 1e-12);
            assert_abs_diff_eq!(safety_metric(&next), best.0, epsilon = 1e-9);
            state = next;
        }
    }

    #[test]
    fn zero_speed_weight_climbs_monotonically() {
        // An odd count keeps the previous delta among the samples.
        let solver = solver(
            SolverConfig::default()
                .with_sample_count(51)
                .with_speed_weight(0.0),
        );
        let target = near_lock_target();
        let mut state = solver.solve(&GimbalState::zero(), &target);
        for _ in 0..40 {
            let next = solver.solve(&state, &target);
            assert!(safety_metric(&next) + EPS >= safety_metric(&state));
            state = next;
        }
    }

    #[test]
    fn redundant_joint_moves_at_most_half_width_per_tick() {
        let solver = RedundantGimbalSolver::<f64>::default();
        let half_width = solver.config().search_half_width;
        let mut state = GimbalState::zero();

        for step in 0..400 {
            let t = f64::from(step) * 0.05;
            let target = quaternion_to_rotation_matrix(&Generator::PseudoRandom.sample(t));
            let next = solver.solve(&state, &target);
            assert!((next.delta - state.delta).abs() <= half_width + EPS);
            state = next;
        }
    }

    #[test]
    fn nearly_identical_targets_keep_steps_small() {
        let solver = solver(SolverConfig::default().with_speed_weight(5.0));
        let half_width = solver.config().search_half_width;
        let first = near_lock_target();
        let second = euler_to_rotation_matrix(&EulerAngles::new(0.3, FRAC_PI_2 - 0.0501, -0.4));

        let a = solver.solve(&GimbalState::zero(), &first);
        let b = solver.solve(&a, &second);
        assert!((b.delta - a.delta).abs() <= half_width + EPS);
    }

    #[test]
    fn zero_width_window_ties_resolve_to_first_candidate() {
        let solver = solver(
            SolverConfig::default()
                .with_search_half_width(0.0)
                .with_sample_count(7),
        );
        let previous = GimbalState::new(0.0, 0.0, 0.0, -0.2);
        let candidates = solver.evaluate(&previous, &near_lock_target());
        assert!(candidates.iter().all(|c| c.objective == candidates[0].objective));
        let next = solver.solve(&previous, &near_lock_target());
        assert_eq!(next, candidates[0].state);
    }

    #[test]
    fn speed_weight_penalizes_far_candidates() {
        let target = near_lock_target();
        let previous = GimbalState::zero();
        let free = solver(SolverConfig::default().with_speed_weight(0.0));
        let heavy = solver(SolverConfig::default().with_speed_weight(1e6));
        let free = free.solve(&previous, &target);
        let heavy = heavy.solve(&previous, &target);
        assert!(heavy.delta.abs() <= free.delta.abs() + EPS);
        assert!(heavy.delta.abs() < 0.01);
    }

    #[test]
    fn quaternion_and_matrix_targets_agree() {
        let solver = RedundantGimbalSolver::<f64>::default();
        let q = Generator::PseudoRandom.sample(2.5);
        let previous = GimbalState::new(0.1, 0.2, 0.3, 0.05);
        assert_eq!(
            solver.solve_quaternion(&previous, &q),
            solver.solve(&previous, &quaternion_to_rotation_matrix(&q))
        );
    }
}
