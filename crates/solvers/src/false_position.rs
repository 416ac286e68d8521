//! False position (regula falsi) with the Illinois modification.
//!
//! # Algorithm
//!
//! Given `[a, b]` with `f(a)` and `f(b)` of opposite sign, each iteration
//! takes the root of the secant through both endpoints,
//!
//! ```text
//! xr = (a f(b) - b f(a)) / (f(b) - f(a))
//! ```
//!
//! and replaces whichever endpoint has the same sign as `f(xr)`, so the root
//! stays bracketed throughout.
//!
//! Plain regula falsi can keep one endpoint fixed for many iterations when the
//! function is convex on the bracket. The Illinois rule halves the fixed
//! endpoint's function value in the secant formula once it has been kept for
//! two updates in a row (and again on every further update it survives),
//! restoring superlinear convergence.
//!
//! # Convergence
//!
//! The solver stops when `|f(xr)|` is below the tolerance, or when the change
//! from the previous estimate, relative to `xr` and in percent, is below it.
//! The relative test is undefined on the first iteration.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration. Observers can return
//! [`Action::StopEarly`] to halt with [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod record;
mod search;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use solution::{Solution, Status};

use rootlab_core::{Function, Observer};

/// Finds a root of `f` inside `bracket` by Illinois false position.
///
/// Reversed bounds are swapped. The observer receives an [`Event`] after
/// every iteration.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] before iterating if a bound is not
/// finite or if `f(a) * f(b) >= 0`. Returns an error if `f` fails or produces
/// a non-finite value at any evaluated point.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::search(f, bracket, config, observer)
}

/// Finds a root of `f` inside `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
