use std::time::Duration;

use crate::Measure;

use super::Record;

/// Indicates how the false position solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual or the relative change fell below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a false position run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last estimate (unrounded).
    pub root: f64,

    /// Function value at `root` (unrounded).
    pub function_value: f64,

    /// One record per iteration, in order.
    pub records: Vec<Record>,

    /// Wall time spent in the solver, including the endpoint evaluations.
    pub elapsed: Duration,
}

impl Solution {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.records.len()
    }

    /// Returns the relative error of the last iteration, in percent.
    #[must_use]
    pub fn final_relative_error(&self) -> Measure {
        self.records
            .last()
            .map_or(Measure::NotApplicable, |record| record.relative_error)
    }
}
