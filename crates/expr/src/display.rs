use std::fmt;

use crate::Expr;

/// Binding strength used to decide where parentheses are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Sum,
    Product,
    Unary,
    Power,
    Atom,
}

impl Expr {
    fn prec(&self) -> Prec {
        match self {
            Self::Add(..) | Self::Sub(..) => Prec::Sum,
            Self::Mul(..) | Self::Div(..) => Prec::Product,
            Self::Neg(_) => Prec::Unary,
            Self::Number(value) if value.is_sign_negative() => Prec::Unary,
            Self::Pow(..) => Prec::Power,
            Self::Number(_) | Self::Constant(_) | Self::Var | Self::Call(..) => Prec::Atom,
        }
    }
}

/// Writes `expr`, parenthesized if it binds looser than `min`.
fn child(f: &mut fmt::Formatter<'_>, expr: &Expr, min: Prec) -> fmt::Result {
    if expr.prec() < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// Renders the expression in the same notation the parser accepts.
///
/// Parentheses are emitted only where precedence or associativity requires
/// them, so `Mul(2, Pow(x, 2))` renders as `2*x^2`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Constant(constant) => f.write_str(constant.name()),
            Self::Var => f.write_str("x"),
            Self::Neg(u) => {
                f.write_str("-")?;
                child(f, u, Prec::Power)
            }
            Self::Add(u, v) => {
                child(f, u, Prec::Sum)?;
                f.write_str(" + ")?;
                child(f, v, Prec::Sum)
            }
            Self::Sub(u, v) => {
                child(f, u, Prec::Sum)?;
                f.write_str(" - ")?;
                child(f, v, Prec::Product)
            }
            Self::Mul(u, v) => {
                child(f, u, Prec::Product)?;
                f.write_str("*")?;
                child(f, v, Prec::Product)
            }
            Self::Div(u, v) => {
                child(f, u, Prec::Product)?;
                f.write_str("/")?;
                child(f, v, Prec::Unary)
            }
            Self::Pow(u, v) => {
                child(f, u, Prec::Atom)?;
                f.write_str("^")?;
                child(f, v, Prec::Power)
            }
            Self::Call(func, u) => write!(f, "{}({u})", func.name()),
        }
    }
}
