use super::Record;

/// Event emitted by the false position solver after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration just completed.
    pub record: &'a Record,

    /// Unrounded estimate.
    pub xr: f64,

    /// Unrounded function value at the estimate.
    pub fxr: f64,
}

impl Event<'_> {
    /// Returns the bracket `[a, b]` the estimate was taken from.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.record.a, self.record.b]
    }
}
