//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::{CliError, Result};

/// Level used when neither flags nor settings name one.
const DEFAULT_LEVEL: &str = "warn";

/// Installs a `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set. Otherwise `-v` raises the level to `info`,
/// `-vv` to `debug` (which shows every iteration), and `-vvv` to `trace`.
/// Without flags the settings file's level applies.
pub fn init(verbose: u8, configured: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = directive(verbose, configured);
            EnvFilter::try_new(directive).map_err(|_| CliError::LogLevel(directive.to_owned()))?
        }
    };

    // A subscriber may already be installed, e.g. under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

fn directive(verbose: u8, configured: Option<&str>) -> &str {
    match verbose {
        0 => configured.unwrap_or(DEFAULT_LEVEL),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
