use std::fmt;

/// Number of decimal places kept in reported values.
pub const REPORT_DECIMALS: i32 = 8;

/// Rounds `value` to [`REPORT_DECIMALS`] decimal places.
///
/// Values too large to scale without overflow are returned unchanged.
#[must_use]
pub fn round_for_report(value: f64) -> f64 {
    let scale = 10_f64.powi(REPORT_DECIMALS);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

/// An error measure that may be undefined.
///
/// The relative error of the first iteration, or of a step that lands exactly
/// on zero, has no meaningful value. Such measures are [`NotApplicable`] rather
/// than NaN or infinity, so a report never holds a non-finite number.
///
/// With the `serde-derive` feature, a `Measure` serializes as either its number
/// or the string `"N/A"`.
///
/// [`NotApplicable`]: Measure::NotApplicable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// The measure is undefined for this iteration.
    NotApplicable,

    /// A finite measured value.
    Value(f64),
}

impl Measure {
    /// Wraps `value`, mapping NaN and infinities to [`Measure::NotApplicable`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::NotApplicable
        }
    }

    /// Relative change of a step, as a percentage of the new value.
    ///
    /// Undefined when the new value is zero.
    #[must_use]
    pub fn relative_percent(step: f64, new_value: f64) -> Self {
        if new_value == 0.0 {
            return Self::NotApplicable;
        }
        Self::new((step / new_value).abs() * 100.0)
    }

    /// Returns the value, if there is one.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::NotApplicable => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns true if the measure is defined and at most `threshold`.
    #[must_use]
    pub fn is_within(self, threshold: f64) -> bool {
        self.value().is_some_and(|value| value <= threshold)
    }

    /// Returns true if the measure is defined and strictly below `threshold`.
    #[must_use]
    pub fn is_below(self, threshold: f64) -> bool {
        self.value().is_some_and(|value| value < threshold)
    }

    pub(crate) fn rounded(self) -> Self {
        match self {
            Self::NotApplicable => Self::NotApplicable,
            Self::Value(value) => Self::Value(round_for_report(value)),
        }
    }
}

impl From<Option<f64>> for Measure {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NotApplicable, Self::new)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => f.write_str("N/A"),
            Self::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}

#[cfg(feature = "serde-derive")]
impl serde::Serialize for Measure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotApplicable => serializer.serialize_str("N/A"),
            Self::Value(value) => serializer.serialize_f64(*value),
        }
    }
}
