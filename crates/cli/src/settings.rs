//! Optional TOML settings file.
//!
//! ```toml
//! [solver]
//! tolerance = 1e-8
//! max_iterations = 50
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{CliError, Result};

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_FILE: &str = "rootlab.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub solver: SolverSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    pub tolerance: Option<f64>,
    pub max_iterations: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// A `tracing` filter directive such as `info` or `rootlab_engine=debug`.
    pub level: Option<String>,
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_FILE`] if it exists.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields the default settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text).map_err(|source| CliError::Settings { path, source })
    }

    fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
