use rootlab_core::Observer;
use tracing::debug;

use crate::traits::{HasIteration, HasRelativeError, HasResidual};

/// An observer that logs each iteration at `DEBUG` level.
///
/// Every event becomes one `tracing` event with the fields `method`,
/// `iteration`, `x`, `fx`, and `relative_error`. The observer never acts, so
/// it can be attached to any solve without changing the result.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    method: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags its log events with `method`.
    #[must_use]
    pub fn new(method: &'static str) -> Self {
        Self { method }
    }

    /// Returns the method tag.
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasResidual + HasRelativeError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            method = self.method,
            iteration = event.iteration(),
            x = event.estimate(),
            fx = event.residual(),
            relative_error = %event.relative_error(),
            "iteration"
        );
        None
    }
}
