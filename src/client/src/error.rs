//! Error types for admin API calls

use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the user-management admin API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// Service rejected the payload; `errors` is the service's detail object
    #[error("Validation failed (HTTP {status}): {errors}")]
    Validation {
        status: u16,
        errors: serde_json::Value,
    },

    /// Any other non-success status
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Client could not be built from its configuration
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Whether the service flagged the submitted data as invalid
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation { .. })
    }
}
