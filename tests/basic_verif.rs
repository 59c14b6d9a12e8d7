use approx::assert_abs_diff_eq;

use heat1d::discretization::generator::{Preset, generate_initial_conditions};
use heat1d::numerics::Scheme;
use heat1d::numerics::metrics::compute_errors;
use heat1d::numerics::solver::SolverError;
use heat1d::numerics::transient::solve;
use heat1d::physics::params::Parameters;

fn sine_run(num_points: usize, dt: f64, num_steps: usize, alpha: f64) -> Parameters {
    Parameters::new(1.0, num_points, dt, num_steps, alpha)
        .expect("valid parameters")
        .with_preset(Preset::SinPiX)
        .with_boundary(0.0, 0.0)
}

#[test]
fn single_explicit_step_on_five_nodes() {
    let mut params = Parameters::default();
    params.set_parameters(1.0, 5, 0.01, 1, 0.01).unwrap();
    let u0 = generate_initial_conditions(1.0, 5, "sin(πx)").unwrap();
    params.set_initial_conditions(u0.as_slice()).unwrap();
    params.set_boundary_conditions(0.0, 0.0);

    let history = solve(&params, Scheme::Explicit).unwrap();
    assert_eq!(history.len(), 2);

    let expected = [0.0, 0.70645, 0.99906, 0.70645, 0.0];
    for (value, want) in history[1].iter().zip(expected) {
        assert_abs_diff_eq!(*value, want, epsilon = 1e-5);
    }
    assert_eq!(history[1][0], 0.0);
    assert_eq!(history[1][4], 0.0);
}

#[test]
fn unknown_preset_fails_before_any_computation() {
    let err = generate_initial_conditions(1.0, 5, "unknown").unwrap_err();
    assert_eq!(err, SolverError::UnknownInitialCondition("unknown".to_string()));
    assert_eq!(err.to_string(), "unknown initial condition type: unknown");
}

#[test]
fn short_initial_conditions_leave_parameters_untouched() {
    let mut params = Parameters::new(1.0, 5, 0.01, 1, 0.01).unwrap();
    let before = params.initial_conditions.clone();

    let result = params.set_initial_conditions(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        result,
        Err(SolverError::InitialConditionLength { expected: 5, found: 4 })
    );
    assert_eq!(params.initial_conditions, before);
}

#[test]
fn initial_state_is_kept_verbatim() {
    // boundary values disagree with the initial ends on purpose
    let params = Parameters::new(1.0, 6, 0.01, 3, 0.1)
        .unwrap()
        .with_initial_conditions(&[7.0, 1.0, -2.0, 3.5, 0.25, 9.0])
        .unwrap()
        .with_boundary(0.0, 0.0);

    for scheme in Scheme::ALL {
        let history = solve(&params, scheme).unwrap();
        assert_eq!(history[0], params.initial_conditions, "{scheme}");
    }
}

#[test]
fn sine_mode_tracks_the_analytical_decay() {
    println!("Test: sin(pi x) decay, r = 0.32");
    let params = sine_run(41, 2.0e-4, 500, 1.0);

    for scheme in Scheme::ALL {
        let history = solve(&params, scheme).unwrap();
        let errors = compute_errors(&params, &history).unwrap();

        assert_eq!(errors.len(), 501);
        assert!(errors[0] < 1e-15, "initial state is the analytical profile");
        assert!(errors.iter().all(|e| e.is_finite() && *e >= 0.0));

        let final_error = *errors.last().unwrap();
        println!("  {scheme}: final RMSE = {:.3e}", final_error);
        assert!(final_error < 5e-3, "{scheme} final RMSE {final_error}");
    }
}

#[test]
fn implicit_error_shrinks_with_refinement() {
    // same final time t = 0.1, dx halved and dt quartered
    let coarse = sine_run(11, 0.01, 10, 1.0);
    let fine = sine_run(21, 0.0025, 40, 1.0);

    let final_error = |params: &Parameters| {
        let history = solve(params, Scheme::Implicit).unwrap();
        *compute_errors(params, &history).unwrap().last().unwrap()
    };

    let e_coarse = final_error(&coarse);
    let e_fine = final_error(&fine);
    println!("Implicit refinement: {:.3e} -> {:.3e}", e_coarse, e_fine);
    assert!(e_fine < e_coarse / 2.0);
}

#[test]
fn errors_are_reported_for_any_configuration() {
    // constant start with hot ends is not the analytical case, the metric
    // still produces one non-negative value per state
    let params = Parameters::new(2.0, 9, 0.05, 20, 0.3)
        .unwrap()
        .with_preset(Preset::Constant)
        .with_boundary(4.0, -1.0);

    let history = solve(&params, Scheme::Implicit).unwrap();
    let errors = compute_errors(&params, &history).unwrap();
    assert_eq!(errors.len(), history.len());
    assert!(errors.iter().all(|e| e.is_finite() && *e >= 0.0));
    assert!(errors[0] > 1.0);
}
