use approx::assert_relative_eq;

use rootlab_expr::{Expr, parse};

use super::{Action, BracketError, Config, Error, Event, Status, solve, solve_unobserved};
use crate::Measure;

fn expr(source: &str) -> Expr {
    parse(source).expect("valid expression")
}

#[test]
fn converges_inside_bracket() {
    let f = expr("x^2 - 4");

    let solution = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters(), 7);
    assert_relative_eq!(solution.root, 2.0, epsilon = 1e-8);
    assert!(solution.function_value.abs() < 1e-6);
}

#[test]
fn first_iteration_has_no_error_estimates() {
    let f = expr("x^2 - 4");

    let solution = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should converge");
    let first = solution.records[0];

    assert_eq!(first.iteration, 1);
    assert_relative_eq!(first.a, 0.0);
    assert_relative_eq!(first.b, 3.0);
    assert_relative_eq!(first.fa, -4.0);
    assert_relative_eq!(first.fb, 5.0);
    assert_relative_eq!(first.xr, 1.333_333_33);
    assert_relative_eq!(first.fxr, -2.222_222_22);
    assert_eq!(first.absolute_error, Measure::NotApplicable);
    assert_eq!(first.relative_error, Measure::NotApplicable);

    let second = solution.records[1];
    assert_relative_eq!(second.a, 1.333_333_33);
    assert_eq!(second.relative_error, Measure::Value(27.777_777_78));
}

#[test]
fn estimates_stay_within_the_shrinking_bracket() {
    for (source, bracket) in [
        ("x^2 - 4", [0.0, 3.0]),
        ("x^3 - 2*x - 5", [2.0, 3.0]),
        ("cos(x) - x", [0.0, 1.0]),
        ("x^10 - 1", [0.0, 1.3]),
    ] {
        let f = expr(source);
        let solution = solve_unobserved(&f, bracket, &Config::default()).expect("converges");

        assert_eq!(solution.status, Status::Converged, "{source}");
        for record in &solution.records {
            assert!(record.a <= record.xr && record.xr <= record.b, "{source}: {record:?}");
            assert!(bracket[0] <= record.xr && record.xr <= bracket[1], "{source}");
            assert!(record.fa * record.fb < 0.0, "{source}: {record:?}");
        }
    }
}

#[test]
fn illinois_rule_breaks_stagnation() {
    // Plain regula falsi keeps the right end fixed here for dozens of steps.
    let f = expr("x^10 - 1");

    let solution = solve_unobserved(&f, [0.0, 1.3], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters() < 20, "took {} iterations", solution.iters());
    assert_relative_eq!(solution.root, 1.0, epsilon = 1e-8);
}

#[test]
fn records_true_endpoint_values() {
    let f = expr("x^2 - 4");

    let solution = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should converge");

    // The right end is kept on iterations 1 through 3, but its recorded value
    // stays f(3) = 5 even after the Illinois weight is applied.
    for record in &solution.records[..3] {
        assert_relative_eq!(record.b, 3.0);
        assert_relative_eq!(record.fb, 5.0);
    }
}

#[test]
fn reversed_bounds_are_swapped() {
    let f = expr("x^2 - 4");

    let forward = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("converges");
    let reversed = solve_unobserved(&f, [3.0, 0.0], &Config::default()).expect("converges");

    assert_eq!(forward.records, reversed.records);
}

#[test]
fn rejects_interval_without_sign_change() {
    let f = expr("x^2 - 4");
    let err = solve_unobserved(&f, [3.0, 5.0], &Config::default()).expect_err("same sign");

    assert!(matches!(
        err,
        Error::InvalidBracket(BracketError::NoSignChange { fa, fb }) if fa == 5.0 && fb == 21.0
    ));
}

#[test]
fn rejects_root_on_endpoint() {
    let f = expr("x^2 - 4");
    let err = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect_err("zero product");

    assert!(matches!(
        err,
        Error::InvalidBracket(BracketError::NoSignChange { .. })
    ));
    assert!(err.to_string().contains("bracket"));
}

#[test]
fn rejects_non_finite_bounds() {
    let f = expr("x");
    let err = solve_unobserved(&f, [f64::NEG_INFINITY, 1.0], &Config::default())
        .expect_err("infinite bound");

    assert!(matches!(
        err,
        Error::InvalidBracket(BracketError::NonFiniteBound)
    ));
}

#[test]
fn reports_non_finite_function_values() {
    let f = expr("1/x");
    let err = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect_err("pole");

    assert!(matches!(err, Error::NonFinite { x, .. } if x == 0.0));
}

#[test]
fn runs_out_of_iterations() {
    let f = expr("x^10 - 1");
    let config = Config::new(3, 1e-12).unwrap();

    let solution = solve_unobserved(&f, [0.0, 1.3], &config).expect("should run out");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.is_converged());
    assert_eq!(solution.iters(), 3);
    assert_relative_eq!(solution.root, solution.records[2].xr, epsilon = 1e-8);
}

#[test]
fn observer_can_stop_early() {
    let f = expr("x^2 - 4");

    let mut brackets = Vec::new();
    let observer = |event: &Event<'_>| {
        brackets.push(event.bracket());
        (event.record.iteration == 3).then_some(Action::StopEarly)
    };

    let solution = solve(&f, [0.0, 3.0], &Config::default(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters(), 3);
    assert_eq!(brackets.len(), 3);
    assert_relative_eq!(brackets[0][0], 0.0);
    assert_relative_eq!(brackets[1][0], 1.333_333_33);
}

#[test]
fn repeated_runs_are_identical() {
    let f = expr("exp(-x) - x");

    let first = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("converges");
    let second = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("converges");

    assert_eq!(first.records, second.records);
    assert_eq!(first.final_relative_error(), second.final_relative_error());
}

#[test]
fn stops_at_the_first_iteration_meeting_either_test() {
    let config = Config::default();
    let tolerance = config.tolerance();

    for (source, bracket) in [
        ("x^2 - 4", [0.0, 3.0]),
        ("x^3 - 2*x - 5", [2.0, 3.0]),
        ("cos(x) - x", [0.0, 1.0]),
        ("x^10 - 1", [0.0, 1.3]),
        ("exp(-x) - x", [0.0, 1.0]),
        ("x - 1", [0.0, 3.0]),
    ] {
        let f = expr(source);

        let mut passing = Vec::new();
        let mut previous: Option<f64> = None;
        let observer = |event: &Event<'_>| {
            let relative = previous.map_or(Measure::NotApplicable, |p| {
                Measure::relative_percent((event.xr - p).abs(), event.xr)
            });
            passing.push(event.fxr.abs() < tolerance || relative.is_below(tolerance));
            previous = Some(event.xr);
            None
        };

        let solution = solve(&f, bracket, &config, observer).expect("converges");
        let (last, earlier) = passing.split_last().expect("at least one event");

        assert_eq!(solution.status, Status::Converged, "{source}");
        assert!(*last, "{source}");
        assert!(earlier.iter().all(|passed| !passed), "{source}");

        let record = solution.records.last().expect("at least one record");
        assert!(
            record.fxr.abs() <= tolerance || record.relative_error.is_within(tolerance),
            "{source}: {record:?}"
        );
    }
}

#[test]
fn exact_hit_converges_on_the_residual_alone() {
    // The secant through (0, -1) and (3, 2) lands exactly on the root.
    let f = expr("x - 1");

    let solution = solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("converges");
    let only = solution.records[0];

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters(), 1);
    assert_relative_eq!(solution.root, 1.0);
    assert_relative_eq!(solution.function_value, 0.0);
    assert_eq!(only.relative_error, Measure::NotApplicable);
    assert_eq!(only.absolute_error, Measure::NotApplicable);
    assert_eq!(solution.final_relative_error(), Measure::NotApplicable);
}
