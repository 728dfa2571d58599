//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Backend URL must start with http:// or https://")]
    InvalidBackendUrl,

    #[error("Backend path must start with '/': {0}")]
    InvalidPath(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("History window must be between 1 and {max}")]
    InvalidHistoryWindow { max: usize },

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}
