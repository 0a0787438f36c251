//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, malformed response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local filesystem failure (upload source, download destination)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The service replied with a non-SUCCESS envelope code
    #[error("service error ({code}): {}", .messages.join("; "))]
    Api {
        /// Service-defined error code, e.g. `VALIDATION_ERROR`
        code: String,
        /// Human-readable messages carried by the envelope
        messages: Vec<String>,
    },

    /// Non-200 status with no parseable envelope in the body
    #[error("unexpected HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw body, for diagnostics
        body: String,
    },

    /// A 200 reply whose body is not a response envelope
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// The service error code, when the failure came from the envelope
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Check if this is a service-side validation rejection
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == "VALIDATION_ERROR")
    }
}
