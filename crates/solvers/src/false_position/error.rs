use std::error::Error as StdError;

use thiserror::Error;

use crate::evaluate::EvalError;

use super::BracketError;

/// Errors that can occur during false position iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function value at x = {x} is not finite ({value})")]
    NonFinite { x: f64, value: f64 },

    #[error("function evaluation failed: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Failed(e) => Self::Function(Box::new(e)),
            EvalError::NonFinite { x, value } => Self::NonFinite { x, value },
        }
    }
}
