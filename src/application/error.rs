//! Errors raised by task handlers and the context loader.

use thiserror::Error;

use crate::domain::foundation::EmployeeId;
use crate::ports::{ApiError, SelectionError};

/// Why a workflow did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Input was missing or a precondition was not met. The text is shown to
    /// the user as-is and no collaborator was called.
    #[error("{0}")]
    Guidance(String),

    /// A collaborator call failed.
    #[error("failed to {action}: {source}")]
    Api {
        action: String,
        #[source]
        source: ApiError,
    },

    /// The selected files could not be read.
    #[error("file selection failed: {0}")]
    Selection(#[from] SelectionError),
}

impl WorkflowError {
    pub fn guidance(message: impl Into<String>) -> Self {
        Self::Guidance(message.into())
    }

    pub fn api(action: impl Into<String>, source: ApiError) -> Self {
        Self::Api {
            action: action.into(),
            source,
        }
    }

    pub fn is_guidance(&self) -> bool {
        matches!(self, WorkflowError::Guidance(_))
    }

    /// The single diagnostic message shown for this failure.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Guidance(text) => text.clone(),
            WorkflowError::Api { action, source } => {
                if let Some(server) = source.server_message() {
                    format!("Failed to {}: {}", action, server)
                } else if source.is_parse() {
                    format!(
                        "Failed to {}: the service sent an unexpected reply. Please try again.",
                        action
                    )
                } else if source.is_transport() {
                    format!(
                        "Failed to {}: the service could not be reached ({}). Please try again.",
                        action, source
                    )
                } else {
                    format!("Failed to {}. Please try again.", action)
                }
            }
            WorkflowError::Selection(err) => format!("Could not read the selected files: {}", err),
        }
    }
}

/// Errors from assembling an EmployeeContext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("failed to load employee profile: {0}")]
    Source(#[from] ApiError),
}
