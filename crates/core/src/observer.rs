/// Receives solver events and decides how the iteration should proceed.
///
/// A solver hands each iteration's event to its observer. Returning
/// `Some(action)` asks the solver for a solver-specific action (such as
/// stopping early); returning `None` lets it continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the no-op observer used by the `solve_unobserved` entry points.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
