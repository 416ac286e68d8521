use std::{convert::Infallible, f64::consts, str::FromStr};

use rootlab_core::Function;

use crate::{ParseError, parse};

/// A symbolic expression in the single variable `x`.
///
/// Expressions are immutable trees. Build one with [`parse`] (or
/// [`str::parse`]), evaluate it with [`Expr::eval`], and differentiate it with
/// [`Expr::derivative`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A named mathematical constant.
    Constant(Constant),
    /// The free variable `x`.
    Var,
    /// Negation, `-u`.
    Neg(Box<Expr>),
    /// Sum, `u + v`.
    Add(Box<Expr>, Box<Expr>),
    /// Difference, `u - v`.
    Sub(Box<Expr>, Box<Expr>),
    /// Product, `u * v`.
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient, `u / v`.
    Div(Box<Expr>, Box<Expr>),
    /// Power, `u ^ v`.
    Pow(Box<Expr>, Box<Expr>),
    /// Application of a named function, `f(u)`.
    Call(Func, Box<Expr>),
}

/// Named constants recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Looks up a constant by the name used in expressions.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" | "PI" => Some(Self::Pi),
            "e" | "E" => Some(Self::E),
            _ => None,
        }
    }

    /// Returns the canonical name used when rendering.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

/// Elementary functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    /// Natural logarithm, written `ln` or `log`.
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    /// Looks up a function by the name used in expressions.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" | "arcsin" => Self::Asin,
            "acos" | "arccos" => Self::Acos,
            "atan" | "arctan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(func)
    }

    /// Returns the canonical name used when rendering.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies the function to a value.
    #[must_use]
    pub fn apply(self, u: f64) -> f64 {
        match self {
            Self::Sin => u.sin(),
            Self::Cos => u.cos(),
            Self::Tan => u.tan(),
            Self::Asin => u.asin(),
            Self::Acos => u.acos(),
            Self::Atan => u.atan(),
            Self::Sinh => u.sinh(),
            Self::Cosh => u.cosh(),
            Self::Tanh => u.tanh(),
            Self::Exp => u.exp(),
            Self::Ln => u.ln(),
            Self::Sqrt => u.sqrt(),
            Self::Abs => u.abs(),
        }
    }
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Follows IEEE semantics: values outside a function's domain (such as
    /// `ln(-1)`) produce NaN and division by zero produces an infinity. Callers
    /// that need finite values must check the result.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Constant(constant) => constant.value(),
            Self::Var => x,
            Self::Neg(u) => -u.eval(x),
            Self::Add(u, v) => u.eval(x) + v.eval(x),
            Self::Sub(u, v) => u.eval(x) - v.eval(x),
            Self::Mul(u, v) => u.eval(x) * v.eval(x),
            Self::Div(u, v) => u.eval(x) / v.eval(x),
            Self::Pow(u, v) => u.eval(x).powf(v.eval(x)),
            Self::Call(func, u) => func.apply(u.eval(x)),
        }
    }

    /// Returns true if the expression mentions `x`.
    #[must_use]
    pub fn depends_on_x(&self) -> bool {
        match self {
            Self::Number(_) | Self::Constant(_) => false,
            Self::Var => true,
            Self::Neg(u) | Self::Call(_, u) => u.depends_on_x(),
            Self::Add(u, v)
            | Self::Sub(u, v)
            | Self::Mul(u, v)
            | Self::Div(u, v)
            | Self::Pow(u, v) => u.depends_on_x() || v.depends_on_x(),
        }
    }

    /// Returns the literal value if this is a numeric literal.
    ///
    /// A negated literal counts, since `-2` parses as `Neg(Number(2))`.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Neg(u) => match **u {
                Self::Number(value) => Some(-value),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Function for Expr {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self.eval(x))
    }
}
