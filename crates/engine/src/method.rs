use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A root-finding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Newton-Raphson from a starting point.
    Newton,

    /// Illinois false position on a bracket.
    #[serde(alias = "false-position")]
    FalsePosition,
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {0:?}, expected \"newton\" or \"false_position\"")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Returns the identifier used in requests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newton => "newton",
            Self::FalsePosition => "false_position",
        }
    }

    /// Returns the human-readable name shown in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newton => "Newton-Raphson",
            Self::FalsePosition => "False Position (Regula Falsi)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newton" => Ok(Self::Newton),
            "false_position" | "false-position" => Ok(Self::FalsePosition),
            other => Err(UnknownMethod(other.to_owned())),
        }
    }
}
