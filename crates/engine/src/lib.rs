//! The root-finding engine behind the `rootlab` tools.
//!
//! A [`Request`] names a method, an expression in `x`, a tolerance, an
//! iteration limit, and the method's seed: a starting point for
//! Newton-Raphson or a bracket for false position. [`solve`] validates it,
//! parses the expression, runs the solver, and returns a [`Report`] ready to
//! serialize.
//!
//! ```
//! use rootlab_engine::{Request, solve};
//!
//! let report = solve(&Request::newton("x^2 - 4", 3.0)).unwrap();
//!
//! assert!(report.converged);
//! assert_eq!(report.root, 2.0);
//! assert_eq!(report.total_iterations, 5);
//! ```
//!
//! Every failure is an [`Error`] whose message embeds its cause. Errors from
//! [`Error::is_validation`] are the caller's to fix; anything else is a
//! solver failure such as a critical point or a non-bracketing interval.

mod error;
mod method;
mod report;
mod request;
mod solve;

pub use error::{Error, InputError};
pub use method::{Method, UnknownMethod};
pub use report::{Details, Report};
pub use request::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, Request};
pub use solve::solve;

pub use rootlab_solvers::{Measure, false_position, newton};
