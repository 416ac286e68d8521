use thiserror::Error;

use rootlab_expr::ParseError;
use rootlab_solvers::{false_position, newton};

/// Problems with a request, found before any solver runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("tolerance must be a finite positive number, got {0}")]
    Tolerance(f64),

    #[error("max_iterations must be a positive integer, got {0}")]
    MaxIterations(i64),

    #[error("Newton-Raphson requires an initial point x0")]
    MissingStart,

    #[error("false position requires both bracket endpoints a and b")]
    MissingBracket,

    #[error("bracket must satisfy a < b, got a = {a}, b = {b}")]
    BracketOrder { a: f64, b: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error(transparent)]
    NewtonConfig(#[from] newton::ConfigError),

    #[error(transparent)]
    FalsePositionConfig(#[from] false_position::ConfigError),
}

/// Any failure of [`solve`](crate::solve).
///
/// The message always embeds the underlying cause.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("failed to interpret the function: {0}. Check the mathematical syntax")]
    Parse(#[from] ParseError),

    #[error("Newton-Raphson failed: {0}")]
    Newton(#[from] newton::Error),

    #[error("false position failed: {0}")]
    FalsePosition(#[from] false_position::Error),
}

impl Error {
    /// Returns true if the request itself was at fault.
    ///
    /// Validation failures cover bad parameters and malformed expressions.
    /// Everything else happened while iterating.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Parse(_))
    }
}
