use thiserror::Error;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket bounds must be finite")]
    NonFiniteBound,

    #[error(
        "f(a) = {fa} and f(b) = {fb} do not have opposite signs, \
         so the interval does not bracket a root"
    )]
    NoSignChange { fa: f64, fb: f64 },
}

/// Checks that bounds are finite and returns them in ascending order.
pub(super) fn ordered(bracket: [f64; 2]) -> Result<[f64; 2], BracketError> {
    let [a, b] = bracket;
    if !a.is_finite() || !b.is_finite() {
        return Err(BracketError::NonFiniteBound);
    }
    Ok(if a <= b { [a, b] } else { [b, a] })
}

/// One end of the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Endpoint {
    pub(super) x: f64,
    pub(super) fx: f64,

    /// Scale applied to `fx` in the secant formula.
    weight: f64,

    /// Consecutive updates in which this endpoint stayed put.
    stale: usize,
}

impl Endpoint {
    fn new(x: f64, fx: f64) -> Self {
        Self {
            x,
            fx,
            weight: 1.0,
            stale: 0,
        }
    }

    fn weighted(&self) -> f64 {
        self.weight * self.fx
    }

    fn replace(&mut self, x: f64, fx: f64) {
        *self = Self::new(x, fx);
    }

    /// Records that the other endpoint moved.
    ///
    /// From the second consecutive miss on, the weight is halved each time.
    fn hold(&mut self) {
        self.stale += 1;
        if self.stale >= 2 {
            self.weight *= 0.5;
        }
    }
}

/// A sign-changing interval maintained by the Illinois rule.
///
/// Each update replaces the endpoint whose function value has the same sign as
/// the new estimate. An endpoint left in place for two or more consecutive
/// updates has its function value halved in the secant formula, which pulls
/// the next estimate toward it and breaks the one-sided stagnation of plain
/// regula falsi. The stored function values are never altered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) a: Endpoint,
    pub(super) b: Endpoint,
}

impl Bracket {
    /// Creates a bracket, requiring `f(a) * f(b) < 0`.
    ///
    /// An endpoint that is already a root is rejected as well, since its
    /// product with the other value is zero.
    pub(super) fn new(a: f64, b: f64, fa: f64, fb: f64) -> Result<Self, BracketError> {
        if fa * fb >= 0.0 {
            return Err(BracketError::NoSignChange { fa, fb });
        }
        Ok(Self {
            a: Endpoint::new(a, fa),
            b: Endpoint::new(b, fb),
        })
    }

    /// Returns the secant estimate `(a f(b) - b f(a)) / (f(b) - f(a))`.
    pub(super) fn estimate(&self) -> f64 {
        let fa = self.a.weighted();
        let fb = self.b.weighted();
        (self.a.x * fb - self.b.x * fa) / (fb - fa)
    }

    /// Replaces one endpoint with the estimate `xr`.
    pub(super) fn update(&mut self, xr: f64, fxr: f64) {
        if self.a.fx * fxr < 0.0 {
            self.b.replace(xr, fxr);
            self.a.hold();
        } else {
            self.a.replace(xr, fxr);
            self.b.hold();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_same_signs_and_endpoint_roots() {
        assert!(matches!(
            Bracket::new(3.0, 4.0, 5.0, 12.0),
            Err(BracketError::NoSignChange { .. })
        ));
        assert!(matches!(
            Bracket::new(1.0, 2.0, -3.0, 0.0),
            Err(BracketError::NoSignChange { .. })
        ));
    }

    #[test]
    fn orders_bounds() {
        assert_eq!(ordered([3.0, 0.0]), Ok([0.0, 3.0]));
        assert_eq!(ordered([0.0, f64::INFINITY]), Err(BracketError::NonFiniteBound));
    }

    #[test]
    fn estimate_is_secant_root() {
        // Line through (0, -4) and (3, 5) crosses zero at 4/3.
        let bracket = Bracket::new(0.0, 3.0, -4.0, 5.0).unwrap();
        assert_relative_eq!(bracket.estimate(), 4.0 / 3.0);
    }

    #[test]
    fn update_keeps_sign_change() {
        let mut bracket = Bracket::new(0.0, 3.0, -4.0, 5.0).unwrap();

        bracket.update(1.0, -3.0);
        assert_relative_eq!(bracket.a.x, 1.0);
        assert_relative_eq!(bracket.b.x, 3.0);

        bracket.update(2.5, 2.25);
        assert_relative_eq!(bracket.a.x, 1.0);
        assert_relative_eq!(bracket.b.x, 2.5);
    }

    #[test]
    fn halves_weight_after_second_stagnant_update() {
        let mut bracket = Bracket::new(0.0, 3.0, -4.0, 5.0).unwrap();

        bracket.update(1.0, -3.0);
        assert_relative_eq!(bracket.b.weight, 1.0);

        bracket.update(1.5, -1.75);
        assert_relative_eq!(bracket.b.weight, 0.5);
        assert_relative_eq!(bracket.b.fx, 5.0);

        bracket.update(1.8, -0.76);
        assert_relative_eq!(bracket.b.weight, 0.25);

        // Weighted secant through (1.8, -0.76) and (3, 1.25).
        assert_relative_eq!(bracket.estimate(), (1.8 * 1.25 + 3.0 * 0.76) / (1.25 + 0.76));
    }

    #[test]
    fn moving_endpoint_resets_its_weight() {
        let mut bracket = Bracket::new(0.0, 3.0, -4.0, 5.0).unwrap();
        bracket.update(1.0, -3.0);
        bracket.update(1.5, -1.75);
        assert_relative_eq!(bracket.b.weight, 0.5);

        bracket.update(2.2, 0.84);
        assert_relative_eq!(bracket.b.weight, 1.0);
        assert_eq!(bracket.b.stale, 0);
        assert_eq!(bracket.a.stale, 1);
        assert_relative_eq!(bracket.a.weight, 1.0);
    }
}
