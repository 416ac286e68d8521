use crate::{Measure, round_for_report};

/// One Newton-Raphson iteration, with values rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iteration: usize,

    /// Current iterate.
    pub xi: f64,

    /// Next iterate, `xi - f(xi) / f'(xi)`.
    pub xi_plus_1: f64,

    /// Function value at `xi`.
    pub fxi: f64,

    /// Derivative value at `xi`.
    pub dfxi: f64,

    /// Step size, `|xi_plus_1 - xi|`.
    pub absolute_error: f64,

    /// Step size relative to `xi_plus_1`, in percent.
    pub relative_error_percent: Measure,
}

impl Record {
    pub(super) fn new(
        iteration: usize,
        xi: f64,
        xi_plus_1: f64,
        fxi: f64,
        dfxi: f64,
        relative_error_percent: Measure,
    ) -> Self {
        Self {
            iteration,
            xi: round_for_report(xi),
            xi_plus_1: round_for_report(xi_plus_1),
            fxi: round_for_report(fxi),
            dfxi: round_for_report(dfxi),
            absolute_error: round_for_report((xi_plus_1 - xi).abs()),
            relative_error_percent: relative_error_percent.rounded(),
        }
    }
}
