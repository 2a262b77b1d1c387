//! Error types for dash-scenario.

use dash_core::ScenarioId;
use thiserror::Error;

/// Errors that can occur while loading scenario data.
///
/// A failure is always local to one scenario: the store keeps serving every
/// other scenario from its cache regardless.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// No `{id}.json` under the data directory.
    #[error("scenario {0} not found in the data directory")]
    NotFound(ScenarioId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed fine but violates a structural rule (wrong snapshot count,
    /// out-of-order months, …).
    #[error("invalid scenario data: {0}")]
    Invalid(String),
}

/// Alias for `Result<T, ScenarioError>`.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
