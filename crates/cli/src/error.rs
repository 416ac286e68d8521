//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// The settings file could not be read.
    #[error("failed to read settings from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`](crate::settings::Settings).
    #[error("invalid settings in {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The logging filter could not be built.
    #[error("invalid log level {0:?}")]
    LogLevel(String),

    /// The report could not be written as JSON.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
