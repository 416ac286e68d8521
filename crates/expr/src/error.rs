use thiserror::Error;

use crate::parser::{MAX_DEPTH, MAX_HEIGHT};

/// Errors that can occur while tokenizing or parsing an expression.
///
/// Every positional variant carries a 1-based `column` into the source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at column {column}")]
    UnexpectedChar { ch: char, column: usize },

    #[error("invalid number '{text}' at column {column}")]
    InvalidNumber { text: String, column: usize },

    #[error("unknown name '{name}' at column {column} (the only variable is 'x')")]
    UnknownName { name: String, column: usize },

    #[error("function '{name}' at column {column} must be followed by '('")]
    MissingArguments { name: String, column: usize },

    #[error("unexpected {found} at column {column}")]
    UnexpectedToken { found: String, column: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("parenthesis opened at column {column} is never closed")]
    UnclosedParen { column: usize },

    #[error("nesting at column {column} goes deeper than {limit} levels", limit = MAX_DEPTH)]
    TooDeep { column: usize },

    #[error(
        "expression is too long: the operator at column {column} would nest more than {limit} operations",
        limit = MAX_HEIGHT
    )]
    TooLong { column: usize },
}
