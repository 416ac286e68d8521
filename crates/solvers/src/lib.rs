//! Iterative root finders for functions of one real variable.
//!
//! Both solvers work with any [`Function`], report every iteration to an
//! [`Observer`], and return a [`Solution`](newton::Solution) holding the full
//! convergence trace.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson from a single starting point, using the
//!   derivative as a second [`Function`]
//! - [`false_position`]: regula falsi on a sign-changing bracket, with the
//!   Illinois correction against a stagnant endpoint
//!
//! # Report values
//!
//! Iteration records hold values rounded to [`REPORT_DECIMALS`] places. The
//! solvers themselves iterate on unrounded values, so rounding never feeds
//! back into the arithmetic. Errors that are undefined (such as the relative
//! error on a first iteration) are carried as [`Measure::NotApplicable`].
//!
//! [`Function`]: rootlab_core::Function
//! [`Observer`]: rootlab_core::Observer

mod evaluate;
mod measure;

pub mod false_position;
pub mod newton;

pub use measure::{Measure, REPORT_DECIMALS, round_for_report};
