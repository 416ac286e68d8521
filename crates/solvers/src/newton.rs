//! Newton-Raphson iteration for a single root.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration follows the tangent line at the current
//! iterate down to the axis:
//!
//! ```text
//! x_{i+1} = x_i - f(x_i) / f'(x_i)
//! ```
//!
//! The relative step `|x_{i+1} - x_i| / |x_{i+1}|`, in percent, is compared
//! against the configured tolerance. Once it is within tolerance the solver
//! stops and reports `x_i`, the iterate whose tangent step was small enough.
//!
//! # Failure
//!
//! A derivative with magnitude below [`DERIVATIVE_FLOOR`] is a critical point
//! and ends the run with [`Error::CriticalPoint`]. Non-finite function or
//! derivative values are errors too. Running out of iterations is not an
//! error: the solution reports [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the [`Record`] for that
//! iteration is built. Observers can return [`Action::StopEarly`] to halt with
//! [`Status::StoppedByObserver`].

mod action;
mod config;
mod convergence;
mod error;
mod event;
mod record;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DERIVATIVE_FLOOR};
pub use convergence::{Convergence, observed_order};
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use solution::{Solution, Status};

use std::time::Instant;

use rootlab_core::{Function, Observer};

use crate::{Measure, evaluate::evaluate};

/// Finds a root of `f` by Newton-Raphson, starting from `x0`.
///
/// `df` must evaluate the derivative of `f`.
/// The observer receives an [`Event`] after every iteration.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the derivative vanishes at an
/// iterate, if an iterate diverges to infinity, or if either function fails
/// or returns a non-finite value.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let start = Instant::now();

    if !x0.is_finite() {
        return Err(Error::InvalidStart(x0));
    }

    let mut records = Vec::new();
    let mut steps = Vec::new();
    let mut xi = x0;

    for iteration in 1..=config.max_iters() {
        let fxi = evaluate(f, xi).map_err(Error::function)?;
        let dfxi = evaluate(df, xi).map_err(Error::derivative)?;

        if dfxi.abs() < DERIVATIVE_FLOOR {
            return Err(Error::CriticalPoint {
                iteration,
                x: xi,
                derivative: dfxi,
            });
        }

        let next = xi - fxi / dfxi;
        if !next.is_finite() {
            return Err(Error::Diverged { iteration });
        }

        let step = (next - xi).abs();
        let relative = Measure::relative_percent(step, next);
        steps.push(step);

        let record = Record::new(iteration, xi, next, fxi, dfxi, relative);
        let action = observer.observe(&Event {
            record: &record,
            fx: fxi,
            dfx: dfxi,
        });
        records.push(record);

        let status = if relative.is_within(config.tolerance()) {
            Some(Status::Converged)
        } else if action == Some(Action::StopEarly) {
            Some(Status::StoppedByObserver)
        } else {
            None
        };

        if let Some(status) = status {
            let convergence = Convergence::classify(status == Status::Converged, &steps);
            return Ok(Solution {
                status,
                root: xi,
                function_value: fxi,
                records,
                convergence,
                elapsed: start.elapsed(),
            });
        }

        xi = next;
    }

    let function_value = evaluate(f, xi).map_err(Error::function)?;
    Ok(Solution {
        status: Status::MaxIters,
        root: xi,
        function_value,
        records,
        convergence: Convergence::DidNotConverge,
        elapsed: start.elapsed(),
    })
}

/// Finds a root of `f` by Newton-Raphson without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, df, x0, config, ())
}
