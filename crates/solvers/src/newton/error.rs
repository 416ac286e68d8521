use std::error::Error as StdError;

use thiserror::Error;

use crate::evaluate::EvalError;

/// Errors that can occur during Newton-Raphson iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial point must be finite, got {0}")]
    InvalidStart(f64),

    #[error(
        "derivative vanished at iteration {iteration} (f'({x}) = {derivative}): \
         critical point reached, the method cannot converge"
    )]
    CriticalPoint {
        iteration: usize,
        x: f64,
        derivative: f64,
    },

    #[error("iterate diverged at iteration {iteration}")]
    Diverged { iteration: usize },

    #[error("function value at x = {x} is not finite ({value})")]
    NonFinite { x: f64, value: f64 },

    #[error("derivative value at x = {x} is not finite ({value})")]
    NonFiniteDerivative { x: f64, value: f64 },

    #[error("function evaluation failed: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative evaluation failed: {0}")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: EvalError<E>) -> Self {
        match err {
            EvalError::Failed(e) => Self::Function(Box::new(e)),
            EvalError::NonFinite { x, value } => Self::NonFinite { x, value },
        }
    }

    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: EvalError<E>) -> Self {
        match err {
            EvalError::Failed(e) => Self::Derivative(Box::new(e)),
            EvalError::NonFinite { x, value } => Self::NonFiniteDerivative { x, value },
        }
    }
}
