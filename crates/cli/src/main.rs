//! `rootlab`: find a real root of a function of `x` from the command line.
//!
//! ```text
//! rootlab newton "x^2 - 4" --x0 3
//! rootlab false-position "cos(x) - x" -a 0 -b 1 --format json
//! rootlab -vv newton "x^2 - 2*x + 1" --x0 2 -t 1e-3
//! ```
//!
//! An expression starting with `-` must follow `--`, as in
//! `rootlab newton --x0 1 -- "-x^3 + 8"`.

mod commands;
mod error;
mod logging;
mod output;
mod settings;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use commands::SolverArgs;
use error::{CliError, Result};
use output::Format;
use settings::Settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to ./rootlab.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv every iteration)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Table)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Newton-Raphson from a starting point
    Newton {
        /// Function of x, e.g. "x^2 - 4"
        expression: String,

        /// Starting point
        #[arg(long = "x0", value_name = "X0", allow_negative_numbers = true)]
        x0: f64,

        #[command(flatten)]
        solver: SolverArgs,
    },

    /// Illinois false position on a bracket [a, b] with f(a) f(b) < 0
    FalsePosition {
        /// Function of x, e.g. "x^3 - 2*x - 5"
        expression: String,

        /// Lower end of the bracket
        #[arg(short, allow_negative_numbers = true)]
        a: f64,

        /// Upper end of the bracket
        #[arg(short, allow_negative_numbers = true)]
        b: f64,

        #[command(flatten)]
        solver: SolverArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    logging::init(cli.verbose, settings.log.level.as_deref())?;

    match cli.command {
        Commands::Newton {
            expression,
            x0,
            solver,
        } => commands::newton::run(expression, x0, &solver, &settings.solver, cli.format),
        Commands::FalsePosition {
            expression,
            a,
            b,
            solver,
        } => commands::false_position::run(
            expression,
            [a, b],
            &solver,
            &settings.solver,
            cli.format,
        ),
    }
}
