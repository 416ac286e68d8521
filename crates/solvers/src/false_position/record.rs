use crate::{Measure, round_for_report};

/// One false position iteration, with values rounded for reporting.
///
/// `fa` and `fb` are the true function values at the bracket ends, not the
/// Illinois-weighted values used to compute `xr`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iteration: usize,

    /// Lower end of the bracket.
    pub a: f64,

    /// Upper end of the bracket.
    pub b: f64,

    /// Estimate produced this iteration.
    pub xr: f64,

    pub fa: f64,
    pub fb: f64,
    pub fxr: f64,

    /// Change from the previous estimate.
    pub absolute_error: Measure,

    /// Change from the previous estimate relative to `xr`, in percent.
    pub relative_error: Measure,
}

/// Unrounded values of one iteration.
pub(super) struct Raw {
    pub(super) a: f64,
    pub(super) b: f64,
    pub(super) xr: f64,
    pub(super) fa: f64,
    pub(super) fb: f64,
    pub(super) fxr: f64,
    pub(super) absolute_error: Measure,
    pub(super) relative_error: Measure,
}

impl Record {
    pub(super) fn new(iteration: usize, raw: &Raw) -> Self {
        Self {
            iteration,
            a: round_for_report(raw.a),
            b: round_for_report(raw.b),
            xr: round_for_report(raw.xr),
            fa: round_for_report(raw.fa),
            fb: round_for_report(raw.fb),
            fxr: round_for_report(raw.fxr),
            absolute_error: raw.absolute_error.rounded(),
            relative_error: raw.relative_error.rounded(),
        }
    }
}
