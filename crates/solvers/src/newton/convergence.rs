use std::fmt;

/// Observed rate at which Newton-Raphson approached its root.
///
/// Newton-Raphson is quadratic only near a simple root. At a multiple root it
/// slows to linear convergence, so the label is measured from the step sizes
/// rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Convergence {
    /// Observed order of at least 1.8, or too few steps to measure.
    Quadratic,

    /// Observed order between 1.2 and 1.8.
    Superlinear,

    /// Observed order below 1.2.
    Linear,

    /// The solver stopped without meeting the tolerance.
    #[cfg_attr(feature = "serde-derive", serde(rename = "did not converge"))]
    DidNotConverge,
}

impl Convergence {
    /// Classifies a run from its unrounded step sizes.
    pub(super) fn classify(converged: bool, steps: &[f64]) -> Self {
        if !converged {
            return Self::DidNotConverge;
        }
        match observed_order(steps) {
            Some(p) if p >= 1.8 => Self::Quadratic,
            Some(p) if p >= 1.2 => Self::Superlinear,
            Some(_) => Self::Linear,
            None => Self::Quadratic,
        }
    }

    /// Returns the label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Quadratic => "quadratic",
            Self::Superlinear => "superlinear",
            Self::Linear => "linear",
            Self::DidNotConverge => "did not converge",
        }
    }
}

impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimates the order of convergence from the last three nonzero steps.
///
/// With steps `e1, e2, e3`, the order is `ln(e3/e2) / ln(e2/e1)`.
#[must_use]
pub fn observed_order(steps: &[f64]) -> Option<f64> {
    let usable: Vec<f64> = steps
        .iter()
        .copied()
        .filter(|step| step.is_finite() && *step > 0.0)
        .collect();

    let [.., e1, e2, e3] = usable[..] else {
        return None;
    };

    let order = (e3 / e2).ln() / (e2 / e1).ln();
    order.is_finite().then_some(order)
}
