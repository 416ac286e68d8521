use super::Record;

/// Event emitted by the Newton-Raphson solver after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration just completed.
    pub record: &'a Record,

    /// Unrounded function value at the current iterate.
    pub fx: f64,

    /// Unrounded derivative value at the current iterate.
    pub dfx: f64,
}

impl Event<'_> {
    /// Returns the iterate that was evaluated.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.xi
    }
}
