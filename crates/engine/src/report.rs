use std::time::Duration;

use serde::Serialize;

use rootlab_solvers::{
    Measure, false_position,
    newton::{self, Convergence},
    round_for_report,
};

use crate::Method;

/// The outcome of a successful [`solve`](crate::solve).
///
/// Floating-point fields are rounded for reporting. `total_iterations` always
/// equals the number of records in [`Details`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Human-readable method name.
    pub method: &'static str,

    pub root: f64,

    /// `f(root)`.
    pub function_value: f64,

    /// True only when the method's tolerance was met.
    pub converged: bool,

    /// Wall time in seconds, from validation to report construction.
    pub execution_time: f64,

    pub total_iterations: usize,

    /// Relative error of the last iteration, in percent.
    pub final_relative_error: Measure,

    #[serde(flatten)]
    pub details: Details,
}

/// Method-specific part of a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Details {
    Newton {
        /// Rendered symbolic derivative.
        derivative_expression: String,
        initial_point: f64,
        convergence_type: Convergence,
        iterations: Vec<newton::Record>,
    },
    FalsePosition {
        initial_bracket: [f64; 2],
        iterations: Vec<false_position::Record>,
    },
}

impl Report {
    pub(crate) fn newton(
        solution: newton::Solution,
        derivative: String,
        x0: f64,
        setup: Duration,
    ) -> Self {
        let final_relative_error = solution.final_relative_error();
        Self {
            method: Method::Newton.label(),
            root: round_for_report(solution.root),
            function_value: round_for_report(solution.function_value),
            converged: solution.is_converged(),
            execution_time: seconds(setup + solution.elapsed),
            total_iterations: solution.iters(),
            final_relative_error,
            details: Details::Newton {
                derivative_expression: derivative,
                initial_point: x0,
                convergence_type: solution.convergence,
                iterations: solution.records,
            },
        }
    }

    pub(crate) fn false_position(
        solution: false_position::Solution,
        bracket: [f64; 2],
        setup: Duration,
    ) -> Self {
        let final_relative_error = solution.final_relative_error();
        Self {
            method: Method::FalsePosition.label(),
            root: round_for_report(solution.root),
            function_value: round_for_report(solution.function_value),
            converged: solution.is_converged(),
            execution_time: seconds(setup + solution.elapsed),
            total_iterations: solution.iters(),
            final_relative_error,
            details: Details::FalsePosition {
                initial_bracket: bracket,
                iterations: solution.records,
            },
        }
    }

    /// Returns the Newton records, if this is a Newton report.
    #[must_use]
    pub fn newton_records(&self) -> Option<&[newton::Record]> {
        match &self.details {
            Details::Newton { iterations, .. } => Some(iterations),
            Details::FalsePosition { .. } => None,
        }
    }

    /// Returns the false position records, if this is a false position report.
    #[must_use]
    pub fn false_position_records(&self) -> Option<&[false_position::Record]> {
        match &self.details {
            Details::FalsePosition { iterations, .. } => Some(iterations),
            Details::Newton { .. } => None,
        }
    }

    /// Returns the Newton convergence classification, if any.
    #[must_use]
    pub fn convergence(&self) -> Option<Convergence> {
        match self.details {
            Details::Newton {
                convergence_type, ..
            } => Some(convergence_type),
            Details::FalsePosition { .. } => None,
        }
    }
}

fn seconds(elapsed: Duration) -> f64 {
    round_for_report(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use serde_json::{Value, json};

    use crate::{Request, solve};

    #[test]
    fn newton_report_serializes_flat() {
        let report = solve(&Request::newton("x^2 - 4", 3.0)).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["method"], "Newton-Raphson");
        assert_eq!(value["converged"], Value::Bool(true));
        assert_eq!(value["derivative_expression"], "2*x");
        assert_eq!(value["initial_point"], json!(3.0));
        assert_eq!(value["convergence_type"], "quadratic");
        assert_eq!(value["total_iterations"], json!(5));
        assert_eq!(value["iterations"].as_array().map(Vec::len), Some(5));
        assert!(value["execution_time"].is_number());
        assert!(value.get("initial_bracket").is_none());
    }

    #[test]
    fn not_applicable_serializes_as_string() {
        let report = solve(&Request::false_position("x^2 - 4", 0.0, 3.0)).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        let first = &value["iterations"][0];
        assert_eq!(first["absolute_error"], "N/A");
        assert_eq!(first["relative_error"], "N/A");
        assert_eq!(value["initial_bracket"], json!([0.0, 3.0]));
        assert!(value.get("convergence_type").is_none());
    }

    #[test]
    fn execution_time_adds_setup_to_solver_time() {
        let solution = false_position::Solution {
            status: false_position::Status::MaxIters,
            root: 1.5,
            function_value: 0.25,
            records: Vec::new(),
            elapsed: Duration::from_millis(1_250),
        };

        let report = Report::false_position(solution, [1.0, 2.0], Duration::from_millis(500));

        assert_relative_eq!(report.execution_time, 1.75);
        assert!(!report.converged);
        assert_eq!(report.final_relative_error, Measure::NotApplicable);
    }

    #[test]
    fn accessors_match_details() {
        let report = solve(&Request::newton("x^2 - 4", 3.0)).unwrap();

        assert_eq!(report.newton_records().map(<[_]>::len), Some(5));
        assert!(report.false_position_records().is_none());
        assert_eq!(report.convergence(), Some(Convergence::Quadratic));
    }
}
