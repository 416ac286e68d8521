use thiserror::Error;

/// Configuration for the false position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a false position solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The tolerance serves two tests: the residual `|f(xr)|` and the relative
    /// change between estimates in percent. Meeting either one converges.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or the tolerance is not a
    /// finite positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_fields() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
        assert_eq!(Config::new(5, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(5, f64::NAN), Err(ConfigError::Tolerance));
        assert!(Config::new(1, 1e-12).is_ok());
    }
}
