//! Error types for the domain layer.

use thiserror::Error;

/// Rejected input when building a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    EmptyField { field: &'static str },

    #[error("{field} must be at most {max}, got {actual}")]
    TooLarge {
        field: &'static str,
        max: u32,
        actual: u32,
    },

    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },

    #[error("workflow cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    pub fn unknown_value(field: &'static str, value: impl Into<String>) -> Self {
        ValidationError::UnknownValue {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_transition(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        ValidationError::InvalidTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
