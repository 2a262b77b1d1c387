//! Shared error type.
//!
//! Sub-crates define their own error enums (`ScenarioError`, `ViewError`) and
//! either wrap `CoreError` as one variant or convert via `From`.  Both
//! patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The error type for `dash-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An identifier that is not one of the 8 recognized scenarios.
    #[error("unknown scenario id {0:?}")]
    UnknownScenario(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dash-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
