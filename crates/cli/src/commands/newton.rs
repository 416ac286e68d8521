//! Newton-Raphson command implementation

use rootlab_engine::Request;
use tracing::info;

use super::{SolverArgs, execute};
use crate::{output::Format, settings::SolverSettings};

/// Run the newton command
pub fn run(
    expression: String,
    x0: f64,
    args: &SolverArgs,
    settings: &SolverSettings,
    format: Format,
) -> anyhow::Result<()> {
    let request = args.apply(Request::newton(expression, x0), settings);
    info!(x0, "starting Newton-Raphson");
    execute(&request, format)
}
