//! Expressions of one real variable `x`.
//!
//! A formula such as `x^2 - 4` or `exp(-x) - ln(x)` is tokenized, parsed into
//! an immutable [`Expr`] tree, and then either evaluated numerically or
//! differentiated symbolically.
//!
//! ```
//! use rootlab_expr::parse;
//!
//! let f = parse("x^2 - 4").unwrap();
//! let df = f.derivative();
//!
//! assert_eq!(f.eval(3.0), 5.0);
//! assert_eq!(df.to_string(), "2*x");
//! ```
//!
//! # Notation
//!
//! - Operators: `+`, `-`, `*`, `/`, and power as either `^` or `**`
//! - Constants: `pi` (or `PI`) and `e` (or `E`)
//! - Functions: `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sinh`, `cosh`,
//!   `tanh`, `exp`, `ln`, `log` (natural), `sqrt`, `abs`
//!
//! Constants are recognized as whole identifiers by the lexer, so `e` is
//! Euler's number while `exp` is the exponential function.

mod derivative;
mod display;
mod error;
mod expr;
mod fold;
mod lexer;
mod parser;

pub use error::ParseError;
pub use expr::{Constant, Expr, Func};
pub use parser::{MAX_DEPTH, MAX_HEIGHT, parse};
