use serde::Deserialize;

use rootlab_solvers::{false_position, newton};

use crate::{InputError, Method};

/// Tolerance used when a request does not name one.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Iteration limit used when a request does not name one.
pub const DEFAULT_MAX_ITERATIONS: i64 = 100;

/// A root-finding request.
///
/// Fields mirror what a caller collects from a user, so nothing is assumed
/// valid: a negative iteration limit or a missing seed is representable and
/// rejected by [`solve`](crate::solve) before any work is done.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Request {
    pub method: Method,

    /// Function of `x` whose root is sought.
    pub expression: String,

    /// Convergence tolerance.
    ///
    /// For Newton-Raphson this bounds the relative step in percent. For false
    /// position it bounds both `|f(xr)|` and the relative step in percent.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: i64,

    /// Starting point, required for Newton-Raphson.
    #[serde(default)]
    pub x0: Option<f64>,

    /// Lower bracket end, required for false position.
    #[serde(default)]
    pub a: Option<f64>,

    /// Upper bracket end, required for false position.
    #[serde(default)]
    pub b: Option<f64>,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> i64 {
    DEFAULT_MAX_ITERATIONS
}

/// A validated request, ready to hand to a solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Plan {
    Newton { config: newton::Config, x0: f64 },
    FalsePosition { config: false_position::Config, bracket: [f64; 2] },
}

impl Request {
    /// Creates a Newton-Raphson request with default tolerance and limit.
    #[must_use]
    pub fn newton(expression: impl Into<String>, x0: f64) -> Self {
        Self {
            method: Method::Newton,
            expression: expression.into(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            x0: Some(x0),
            a: None,
            b: None,
        }
    }

    /// Creates a false position request with default tolerance and limit.
    #[must_use]
    pub fn false_position(expression: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            method: Method::FalsePosition,
            expression: expression.into(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            x0: None,
            a: Some(a),
            b: Some(b),
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: i64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks the parameters and the seed for the chosen method.
    pub(crate) fn plan(&self) -> Result<Plan, InputError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(InputError::Tolerance(self.tolerance));
        }
        let max_iters = usize::try_from(self.max_iterations)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(InputError::MaxIterations(self.max_iterations))?;

        match self.method {
            Method::Newton => {
                let x0 = self.x0.ok_or(InputError::MissingStart)?;
                finite("x0", x0)?;
                Ok(Plan::Newton {
                    config: newton::Config::new(max_iters, self.tolerance)?,
                    x0,
                })
            }
            Method::FalsePosition => {
                let (Some(a), Some(b)) = (self.a, self.b) else {
                    return Err(InputError::MissingBracket);
                };
                finite("a", a)?;
                finite("b", b)?;
                if a >= b {
                    return Err(InputError::BracketOrder { a, b });
                }
                Ok(Plan::FalsePosition {
                    config: false_position::Config::new(max_iters, self.tolerance)?,
                    bracket: [a, b],
                })
            }
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFinite { name, value })
    }
}
