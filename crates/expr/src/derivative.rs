use crate::{
    Expr, Func,
    fold::{add, call, div, mul, neg, num, pow, sub},
};

impl Expr {
    /// Returns the symbolic derivative with respect to `x`.
    ///
    /// Applies the sum, product, quotient, power, and chain rules. Products of
    /// zeros and ones are folded away while the result is built, so
    /// `x^2 - 4` differentiates to `2*x` rather than `2*x^1*1 - 0`.
    ///
    /// Differentiation is total: every expression produced by the parser has a
    /// derivative, even where it evaluates to NaN (such as `abs(x)` at zero).
    #[must_use]
    pub fn derivative(&self) -> Expr {
        match self {
            Self::Number(_) | Self::Constant(_) => num(0.0),
            Self::Var => num(1.0),
            Self::Neg(u) => neg(u.derivative()),
            Self::Add(u, v) => add(u.derivative(), v.derivative()),
            Self::Sub(u, v) => sub(u.derivative(), v.derivative()),
            Self::Mul(u, v) => add(
                mul(u.derivative(), (**v).clone()),
                mul((**u).clone(), v.derivative()),
            ),
            Self::Div(u, v) if !v.depends_on_x() => div(u.derivative(), (**v).clone()),
            Self::Div(u, v) => div(
                sub(
                    mul(u.derivative(), (**v).clone()),
                    mul((**u).clone(), v.derivative()),
                ),
                pow((**v).clone(), num(2.0)),
            ),
            Self::Pow(u, v) => power_rule(u, v),
            Self::Call(func, u) => mul(outer_derivative(*func, u), u.derivative()),
        }
    }
}

/// Differentiates `u ^ v`.
fn power_rule(u: &Expr, v: &Expr) -> Expr {
    // d(u^n) = n * u^(n-1) * u'
    if !v.depends_on_x() {
        let lowered = pow(u.clone(), sub(v.clone(), num(1.0)));
        return mul(mul(v.clone(), lowered), u.derivative());
    }

    let this = pow(u.clone(), v.clone());

    // d(a^v) = a^v * ln(a) * v'
    if !u.depends_on_x() {
        return mul(mul(this, call(Func::Ln, u.clone())), v.derivative());
    }

    // d(u^v) = u^v * (v' * ln(u) + v * u' / u)
    let log_term = mul(v.derivative(), call(Func::Ln, u.clone()));
    let base_term = div(mul(v.clone(), u.derivative()), u.clone());
    mul(this, add(log_term, base_term))
}

/// Derivative of `func` with respect to its argument, evaluated at `u`.
fn outer_derivative(func: Func, u: &Expr) -> Expr {
    let u = u.clone();
    match func {
        Func::Sin => call(Func::Cos, u),
        Func::Cos => neg(call(Func::Sin, u)),
        Func::Tan => div(num(1.0), pow(call(Func::Cos, u), num(2.0))),
        Func::Asin => div(num(1.0), call(Func::Sqrt, sub(num(1.0), pow(u, num(2.0))))),
        Func::Acos => neg(div(
            num(1.0),
            call(Func::Sqrt, sub(num(1.0), pow(u, num(2.0)))),
        )),
        Func::Atan => div(num(1.0), add(num(1.0), pow(u, num(2.0)))),
        Func::Sinh => call(Func::Cosh, u),
        Func::Cosh => call(Func::Sinh, u),
        Func::Tanh => sub(num(1.0), pow(call(Func::Tanh, u), num(2.0))),
        Func::Exp => call(Func::Exp, u),
        Func::Ln => div(num(1.0), u),
        Func::Sqrt => div(num(1.0), mul(num(2.0), call(Func::Sqrt, u))),
        Func::Abs => div(u.clone(), call(Func::Abs, u)),
    }
}
