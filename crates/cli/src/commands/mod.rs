//! CLI command implementations
//!
//! Each submodule builds a [`Request`] for one method and hands it to
//! [`execute`].

pub mod false_position;
pub mod newton;

use clap::Args;
use rootlab_engine::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, Request, solve};
use tracing::{error, warn};

use crate::{output::Format, settings::SolverSettings};

/// Stopping criteria shared by every method.
#[derive(Debug, Clone, Default, Args)]
pub struct SolverArgs {
    /// Convergence tolerance, in percent of the relative step
    #[arg(short, long, allow_negative_numbers = true)]
    pub tolerance: Option<f64>,

    /// Maximum number of iterations
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_iterations: Option<i64>,
}

impl SolverArgs {
    /// Fills in the stopping criteria, preferring flags over settings.
    pub fn apply(&self, request: Request, settings: &SolverSettings) -> Request {
        let tolerance = self
            .tolerance
            .or(settings.tolerance)
            .unwrap_or(DEFAULT_TOLERANCE);
        let max_iterations = self
            .max_iterations
            .or(settings.max_iterations)
            .unwrap_or(DEFAULT_MAX_ITERATIONS);

        request
            .with_tolerance(tolerance)
            .with_max_iterations(max_iterations)
    }
}

/// Solves `request` and prints the report.
///
/// Rejected requests are logged as warnings, solver failures as errors.
pub fn execute(request: &Request, format: Format) -> anyhow::Result<()> {
    let report = match solve(request) {
        Ok(report) => report,
        Err(err) => {
            if err.is_validation() {
                warn!(method = %request.method, error = %err, "rejected request");
            } else {
                error!(method = %request.method, error = %err, "solve failed");
            }
            return Err(err.into());
        }
    };

    crate::output::print(&report, format)?;
    Ok(())
}
