//! Shared helpers for the end-to-end tests.

use rootlab_engine::{Error, Report, Request, solve};
use serde::Deserialize;
use serde_json::Value;

/// A batch of requests, as a caller might load them from a TOML file.
#[derive(Debug, Deserialize)]
pub struct Batch {
    pub request: Vec<Request>,
}

/// Parses a TOML document holding `[[request]]` tables.
pub fn batch_from_toml(text: &str) -> Result<Batch, toml::de::Error> {
    toml::from_str(text)
}

/// Solves `request` and returns the report as JSON.
pub fn solve_to_json(request: &Request) -> Result<Value, Error> {
    let report = solve(request)?;
    Ok(to_json(&report))
}

/// Serializes `report` to JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized, which would be a bug.
pub fn to_json(report: &Report) -> Value {
    serde_json::to_value(report).expect("reports always serialize")
}
