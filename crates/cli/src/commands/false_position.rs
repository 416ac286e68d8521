//! False position command implementation

use rootlab_engine::Request;
use tracing::info;

use super::{SolverArgs, execute};
use crate::{output::Format, settings::SolverSettings};

/// Run the false-position command
pub fn run(
    expression: String,
    bracket: [f64; 2],
    args: &SolverArgs,
    settings: &SolverSettings,
    format: Format,
) -> anyhow::Result<()> {
    let [a, b] = bracket;
    let request = args.apply(Request::false_position(expression, a, b), settings);
    info!(a, b, "starting false position");
    execute(&request, format)
}
