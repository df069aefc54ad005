/*
[INPUT]:  Error sources (HTTP transport, API status codes, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the taskdeck adapter
#[derive(Error, Debug)]
pub enum TaskdeckError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status other than 404
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The addressed resource does not exist on the server
    #[error("resource not found")]
    NotFound,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TaskdeckError {
    /// Check whether the error is the distinct not-found condition.
    ///
    /// Callers surface this differently from a generic network failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskdeckError::NotFound)
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskdeckError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for taskdeck operations
pub type Result<T> = std::result::Result<T, TaskdeckError>;
