//! Error type shared by every backend collaborator port.
//!
//! The variants keep transport problems ("unreachable") apart from parse
//! problems ("unexpected reply") so callers can tell users which one
//! happened.

use thiserror::Error;

/// Failure of a call to a backend collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The transport gave up waiting.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The collaborator answered with a non-2xx status.
    #[error("unexpected status {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text extracted from the body, if any.
        message: Option<String>,
    },

    /// The body was not JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// The body was JSON but lacked an expected field or had the wrong shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// The collaborator reported `success: false`.
    #[error("request rejected{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected {
        /// Server-provided error string, if any.
        message: Option<String>,
    },
}

impl ApiError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Creates a missing-field error.
    pub fn missing_field(field: &str) -> Self {
        Self::UnexpectedShape(format!("missing field `{}`", field))
    }

    /// Creates a rejection carrying the server's error string.
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// True for failures where no usable response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Timeout { .. } | ApiError::Status { .. }
        )
    }

    /// True for responses that arrived but could not be understood.
    pub fn is_parse(&self) -> bool {
        matches!(self, ApiError::InvalidBody(_) | ApiError::UnexpectedShape(_))
    }

    /// The server-provided error text, when the collaborator sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

/// Unwraps a required response field.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::missing_field(field))
}
