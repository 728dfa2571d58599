//! File selector returning a fixed selection.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{FileSelector, SelectedFile, SelectionError};

#[derive(Debug, Clone, Default)]
pub struct StaticFileSelector {
    files: Vec<SelectedFile>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticFileSelector {
    /// A selector that always cancels.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_files(files: Vec<SelectedFile>) -> Self {
        Self {
            files,
            calls: Arc::default(),
        }
    }

    /// Adds a text file with the given content.
    pub fn with_text(mut self, name: &str, content: &str) -> Self {
        self.files
            .push(SelectedFile::new(name, "text/plain", content.as_bytes().to_vec()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FileSelector for StaticFileSelector {
    async fn select_files(&self, args: &str) -> Result<Vec<SelectedFile>, SelectionError> {
        self.calls.lock().unwrap().push(args.to_string());
        Ok(self.files.clone())
    }
}
