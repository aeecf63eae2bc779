//! Application-wide error types using thiserror.

use replay_common::ReplayError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Error from the history, report, or configuration layers.
    #[error("{0}")]
    Replay(#[from] ReplayError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the dashboard application.
pub type AppResult<T> = Result<T, AppError>;
