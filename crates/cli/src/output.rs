//! Report rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use rootlab_engine::{Details, Report};

use crate::Result;

/// How a report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Summary followed by one row per iteration.
    Table,

    /// The full report as pretty-printed JSON.
    Json,
}

/// Writes `report` to stdout.
pub fn print(report: &Report, format: Format) -> Result<()> {
    let stdout = io::stdout();
    write(&mut stdout.lock(), report, format)
}

pub fn write(out: &mut impl Write, report: &Report, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        Format::Table => write_table(out, report)?,
    }
    Ok(())
}

fn write_table(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Method:               {}", report.method)?;
    writeln!(out, "Root:                 {}", report.root)?;
    writeln!(out, "f(root):              {}", report.function_value)?;
    writeln!(out, "Converged:            {}", report.converged)?;
    writeln!(out, "Iterations:           {}", report.total_iterations)?;
    writeln!(out, "Final relative error: {} %", report.final_relative_error)?;
    writeln!(out, "Execution time:       {} s", report.execution_time)?;

    match &report.details {
        Details::Newton {
            derivative_expression,
            initial_point,
            convergence_type,
            iterations,
        } => {
            writeln!(out, "Derivative:           {derivative_expression}")?;
            writeln!(out, "Initial point:        {initial_point}")?;
            writeln!(out, "Convergence:          {convergence_type}")?;
            writeln!(out)?;
            writeln!(
                out,
                "{:>5} {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
                "iter", "xi", "xi+1", "f(xi)", "f'(xi)", "abs error", "rel error %"
            )?;
            for r in iterations {
                writeln!(
                    out,
                    "{:>5} {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
                    r.iteration,
                    r.xi,
                    r.xi_plus_1,
                    r.fxi,
                    r.dfxi,
                    r.absolute_error,
                    r.relative_error_percent.to_string(),
                )?;
            }
        }
        Details::FalsePosition {
            initial_bracket,
            iterations,
        } => {
            let [a, b] = initial_bracket;
            writeln!(out, "Initial bracket:      [{a}, {b}]")?;
            writeln!(out)?;
            writeln!(
                out,
                "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
                "iter", "a", "b", "xr", "f(a)", "f(b)", "f(xr)", "abs error", "rel error %"
            )?;
            for r in iterations {
                writeln!(
                    out,
                    "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
                    r.iteration,
                    r.a,
                    r.b,
                    r.xr,
                    r.fa,
                    r.fb,
                    r.fxr,
                    r.absolute_error.to_string(),
                    r.relative_error.to_string(),
                )?;
            }
        }
    }
    Ok(())
}
