/// Actions an observer can take during false position iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest estimate.
    StopEarly,
}
