//! Domain Errors
//!
//! A single error type covers local validation and every way a remote call
//! can fail. Its `Display` output is what the error banner shows.

use thiserror::Error;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Add or search submitted with an empty field
    #[error("Type something")]
    EmptyInput,

    /// The API answered with an error; its message is shown as-is
    #[error("{0}")]
    Api(String),

    /// The request did not produce a usable response
    #[error("Network error: {0}")]
    Network(String),

    /// The response did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Startup configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Decode(err.to_string())
    }
}
