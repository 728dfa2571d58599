//! File Selector Port - yields the files chosen for an upload.

use async_trait::async_trait;
use thiserror::Error;

/// A file picked by the user, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Errors from selecting or reading files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("cannot read '{path}': {reason}")]
    Unreadable { path: String, reason: String },
}

/// Port for choosing upload files.
///
/// An empty selection means the user canceled.
#[async_trait]
pub trait FileSelector: Send + Sync {
    /// Selects files. `args` is the raw argument string of `/upload`.
    async fn select_files(&self, args: &str) -> Result<Vec<SelectedFile>, SelectionError>;
}
