//! Interactive convergence plots for the rootlab solvers.
//!
//! Each mode solves a small root-finding problem and opens a plot window
//! showing how the residual and the relative error evolve per iteration.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- newton
//! cargo run --example plot --features plot -- newton "x^2" 1
//! cargo run --example plot --features plot -- false-position
//! cargo run --example plot --features plot -- illinois
//! ```
//!
//! # Modes
//!
//! - **newton [expr] [x0]**: Newton-Raphson on `cos(x) - x` from 1 by
//!   default. Try `"x^2 - 2*x + 1" 2` to watch a double root converge linearly.
//!
//! - **false-position**: Illinois false position on `x^3 - 2*x - 5` over
//!   \[2, 3\].
//!
//! - **illinois**: False position on `x^10 - 1` over \[0, 1.3\], where plain
//!   regula falsi stagnates. The Illinois correction kicks in after the right
//!   endpoint is kept twice.

use std::error::Error;

use rootlab_expr::parse;
use rootlab_observers::{PlotObserver, PlotOptions};
use rootlab_solvers::{false_position, newton};

const TRACES: [&str; 2] = ["|f(x)|", "Relative error (%)"];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = args.first().map_or("newton", String::as_str);
    match mode {
        "newton" => {
            let source = args.get(1).map_or("cos(x) - x", String::as_str);
            let x0 = args.get(2).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(1.0);
            newton_mode(source, x0)
        }
        "false-position" => bracket_mode("x^3 - 2*x - 5", [2.0, 3.0]),
        "illinois" => bracket_mode("x^10 - 1", [0.0, 1.3]),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [newton [expr] [x0]|false-position|illinois]");
            std::process::exit(1);
        }
    }
}

/// Runs Newton-Raphson and plots its trace on a log scale.
fn newton_mode(source: &str, x0: f64) -> Result<(), Box<dyn Error>> {
    let f = parse(source)?;
    let df = f.derivative();
    let mut obs = PlotObserver::<2>::new(TRACES);

    let solution = newton::solve(&f, &df, x0, &newton::Config::default(), &mut obs)?;
    println!(
        "root {} after {} iterations ({})",
        solution.root,
        solution.iters(),
        solution.convergence
    );

    obs.show(
        PlotOptions::titled(format!("Newton-Raphson: {source} = 0, f'(x) = {df}"))
            .with_legend()
            .log_scale(),
    )?;
    Ok(())
}

/// Runs Illinois false position and plots its trace on a log scale.
fn bracket_mode(source: &str, bracket: [f64; 2]) -> Result<(), Box<dyn Error>> {
    let f = parse(source)?;
    let mut obs = PlotObserver::<2>::new(TRACES);

    let solution =
        false_position::solve(&f, bracket, &false_position::Config::default(), &mut obs)?;
    println!("root {} after {} iterations", solution.root, solution.iters());

    obs.show(
        PlotOptions::titled(format!(
            "False position: {source} = 0 on [{}, {}]",
            bracket[0], bracket[1]
        ))
        .with_legend()
        .log_scale(),
    )?;
    Ok(())
}
