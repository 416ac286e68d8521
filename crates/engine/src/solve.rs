use std::time::Instant;

use tracing::info;

use rootlab_expr::parse;
use rootlab_observers::TraceObserver;
use rootlab_solvers::{false_position, newton};

use crate::{Error, Report, Request, request::Plan};

/// Runs the request and builds its report.
///
/// The request is validated before the expression is parsed, and parsed
/// before any iteration. Each iteration is logged at `DEBUG` through
/// [`TraceObserver`]; the start and end of the solve are logged at `INFO`.
///
/// # Errors
///
/// Returns [`Error::Input`] or [`Error::Parse`] if the request is invalid, and
/// a solver error if the method fails, for example on a critical point or an
/// interval that does not bracket a root. Running out of iterations is not an
/// error: the report has `converged == false`.
pub fn solve(request: &Request) -> Result<Report, Error> {
    let plan = request.plan()?;
    let start = Instant::now();

    let f = parse(&request.expression)?;
    let method = request.method;
    info!(%method, expression = %f, "solving");

    let observer = TraceObserver::new(method.as_str());
    let report = match plan {
        Plan::Newton { config, x0 } => {
            let df = f.derivative();
            let setup = start.elapsed();
            let solution = newton::solve(&f, &df, x0, &config, observer)?;
            Report::newton(solution, df.to_string(), x0, setup)
        }
        Plan::FalsePosition { config, bracket } => {
            let setup = start.elapsed();
            let solution = false_position::solve(&f, bracket, &config, observer)?;
            Report::false_position(solution, bracket, setup)
        }
    };

    info!(
        %method,
        converged = report.converged,
        iterations = report.total_iterations,
        root = report.root,
        "finished"
    );
    Ok(report)
}
