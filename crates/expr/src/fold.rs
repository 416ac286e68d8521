//! Expression constructors that fold trivial algebra as they build.
//!
//! Differentiation produces many `0 * u`, `1 * u`, and `u + 0` terms. Building
//! through these helpers keeps derivatives small enough to read, without
//! attempting general simplification.

use crate::{Expr, Func};

pub(crate) fn num(value: f64) -> Expr {
    Expr::Number(value)
}

#[allow(clippy::float_cmp)]
fn is(expr: &Expr, value: f64) -> bool {
    expr.as_number().is_some_and(|n| n == value)
}

/// Collapses a negated literal into a plain `Number`.
fn literal(expr: Expr) -> Expr {
    match expr.as_number() {
        Some(value) => num(value),
        None => expr,
    }
}

pub(crate) fn neg(u: Expr) -> Expr {
    match literal(u) {
        Expr::Number(n) => num(-n),
        Expr::Neg(inner) => *inner,
        Expr::Mul(factor, rest) => match factor.as_number() {
            Some(n) => Expr::Mul(Box::new(num(-n)), rest),
            None => Expr::Neg(Box::new(Expr::Mul(factor, rest))),
        },
        u => Expr::Neg(Box::new(u)),
    }
}

pub(crate) fn add(u: Expr, v: Expr) -> Expr {
    let (u, v) = (literal(u), literal(v));
    match (u.as_number(), v.as_number()) {
        (Some(a), Some(b)) => num(a + b),
        (Some(a), _) if a == 0.0 => v,
        (_, Some(b)) if b == 0.0 => u,
        _ => match v {
            Expr::Neg(v) => Expr::Sub(Box::new(u), v),
            Expr::Number(b) if b < 0.0 => Expr::Sub(Box::new(u), Box::new(num(-b))),
            v => Expr::Add(Box::new(u), Box::new(v)),
        },
    }
}

pub(crate) fn sub(u: Expr, v: Expr) -> Expr {
    let (u, v) = (literal(u), literal(v));
    match (u.as_number(), v.as_number()) {
        (Some(a), Some(b)) => num(a - b),
        (Some(a), _) if a == 0.0 => neg(v),
        (_, Some(b)) if b == 0.0 => u,
        _ => match v {
            Expr::Neg(v) => Expr::Add(Box::new(u), v),
            Expr::Number(b) if b < 0.0 => Expr::Add(Box::new(u), Box::new(num(-b))),
            v => Expr::Sub(Box::new(u), Box::new(v)),
        },
    }
}

/// Builds `u * v`, keeping any numeric factor in front.
pub(crate) fn mul(u: Expr, v: Expr) -> Expr {
    let (u, v) = (literal(u), literal(v));
    if is(&u, 0.0) || is(&v, 0.0) {
        return num(0.0);
    }
    if is(&u, 1.0) {
        return v;
    }
    if is(&v, 1.0) {
        return u;
    }
    if is(&u, -1.0) {
        return neg(v);
    }
    if is(&v, -1.0) {
        return neg(u);
    }

    match (u, v) {
        (Expr::Number(a), Expr::Number(b)) => num(a * b),
        (u, Expr::Number(b)) => mul(num(b), u),
        (Expr::Number(a), Expr::Mul(inner, rest)) => match *inner {
            Expr::Number(b) => mul(num(a * b), *rest),
            inner => Expr::Mul(Box::new(num(a)), Box::new(Expr::Mul(Box::new(inner), rest))),
        },
        (Expr::Neg(u), v) => neg(mul(*u, v)),
        (u, Expr::Neg(v)) => neg(mul(u, *v)),
        (Expr::Div(one, d), v) if is(&one, 1.0) => div(v, *d),
        (u, Expr::Div(one, d)) if is(&one, 1.0) => div(u, *d),
        (u, v) => Expr::Mul(Box::new(u), Box::new(v)),
    }
}

pub(crate) fn div(u: Expr, v: Expr) -> Expr {
    let (u, v) = (literal(u), literal(v));
    if is(&v, 1.0) {
        return u;
    }
    if is(&u, 0.0) {
        return num(0.0);
    }
    match (u, v) {
        (Expr::Number(a), Expr::Number(b)) if b != 0.0 => num(a / b),
        (Expr::Neg(u), v) => neg(div(*u, v)),
        (u, v) => Expr::Div(Box::new(u), Box::new(v)),
    }
}

pub(crate) fn pow(u: Expr, v: Expr) -> Expr {
    let (u, v) = (literal(u), literal(v));
    if is(&v, 0.0) {
        return num(1.0);
    }
    if is(&v, 1.0) {
        return u;
    }
    match (u, v) {
        (Expr::Number(a), Expr::Number(b)) if a.powf(b).is_finite() => num(a.powf(b)),
        (u, v) => Expr::Pow(Box::new(u), Box::new(v)),
    }
}

pub(crate) fn call(func: Func, u: Expr) -> Expr {
    Expr::Call(func, Box::new(u))
}
