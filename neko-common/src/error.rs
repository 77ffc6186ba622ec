//! Common error types for the neko feeder

use thiserror::Error;

/// Common result type for feeder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the feeder crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input or path
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
