//! Error types for dash-view.

use thiserror::Error;

/// Errors that can occur when exporting view data.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, ViewError>`.
pub type ViewResult<T> = Result<T, ViewError>;
