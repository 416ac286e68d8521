//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work with either root finder.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that know their 1-based iteration number
//! - [`HasResidual`]: events that carry an estimate and the function value there
//! - [`HasRelativeError`]: events that carry a relative error in percent
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootlab_core::Observer;
//! use rootlab_observers::traits::{CanStopEarly, HasResidual};
//!
//! /// Stops once `|f(x)|` is small, regardless of the step size.
//! struct SmallResidual {
//!     threshold: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for SmallResidual {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use rootlab_solvers::{Measure, false_position, newton};

/// An event that knows which iteration produced it.
pub trait HasIteration {
    /// Returns the iteration number, starting at 1.
    fn iteration(&self) -> usize;
}

/// An event that carries an estimate of the root and its residual.
pub trait HasResidual {
    /// Returns the estimate evaluated in this iteration.
    fn estimate(&self) -> f64;

    /// Returns the function value at [`estimate`](HasResidual::estimate).
    fn residual(&self) -> f64;
}

/// An event that carries a relative error.
pub trait HasRelativeError {
    /// Returns the relative error for this iteration, in percent.
    fn relative_error(&self) -> Measure;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton::Event ---

impl HasIteration for newton::Event<'_> {
    fn iteration(&self) -> usize {
        self.record.iteration
    }
}

impl HasResidual for newton::Event<'_> {
    fn estimate(&self) -> f64 {
        self.x()
    }

    fn residual(&self) -> f64 {
        self.fx
    }
}

impl HasRelativeError for newton::Event<'_> {
    fn relative_error(&self) -> Measure {
        self.record.relative_error_percent
    }
}

// --- false_position::Event ---

impl HasIteration for false_position::Event<'_> {
    fn iteration(&self) -> usize {
        self.record.iteration
    }
}

impl HasResidual for false_position::Event<'_> {
    fn estimate(&self) -> f64 {
        self.xr
    }

    fn residual(&self) -> f64 {
        self.fxr
    }
}

impl HasRelativeError for false_position::Event<'_> {
    fn relative_error(&self) -> Measure {
        self.record.relative_error
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for false_position::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootlab_core::Observer;
    use rootlab_expr::parse;

    /// Stops after a fixed number of iterations.
    struct StopAt(usize);

    impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAt {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.iteration() >= self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_drives_newton() {
        let f = parse("x^2 - 4").unwrap();
        let df = f.derivative();

        let solution =
            newton::solve(&f, &df, 3.0, &newton::Config::default(), StopAt(2)).unwrap();

        assert_eq!(solution.status, newton::Status::StoppedByObserver);
        assert_eq!(solution.iters(), 2);
    }

    #[test]
    fn generic_observer_drives_false_position() {
        let f = parse("x^2 - 4").unwrap();

        let solution =
            false_position::solve(&f, [0.0, 3.0], &false_position::Config::default(), StopAt(1))
                .unwrap();

        assert_eq!(solution.status, false_position::Status::StoppedByObserver);
        assert_eq!(solution.iters(), 1);
    }

    #[test]
    fn residuals_are_unrounded() {
        let f = parse("x^2 - 4").unwrap();
        let mut residuals = Vec::new();

        false_position::solve(
            &f,
            [0.0, 3.0],
            &false_position::Config::default(),
            |event: &false_position::Event<'_>| {
                residuals.push((event.estimate(), event.residual()));
                None
            },
        )
        .unwrap();

        let (x, fx) = residuals[0];
        assert_relative_eq!(x, 4.0 / 3.0);
        assert_relative_eq!(fx, 16.0 / 9.0 - 4.0, epsilon = 1e-12);
    }
}
