//! Filesystem file selector.
//!
//! Treats the `/upload` argument string as whitespace-separated paths,
//! resolved against a base directory. No paths means an empty selection.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{FileSelector, SelectedFile, SelectionError};

/// Maximum file size accepted for upload (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PathFileSelector {
    base_dir: PathBuf,
}

impl PathFileSelector {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    async fn read_one(&self, raw: &str) -> Result<SelectedFile, SelectionError> {
        let path = self.resolve(raw);
        let unreadable = |reason: String| SelectionError::Unreadable {
            path: path.display().to_string(),
            reason,
        };

        let metadata = fs::metadata(&path).await.map_err(|e| unreadable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(unreadable("not a regular file".to_string()));
        }
        if metadata.len() > MAX_FILE_SIZE_BYTES {
            return Err(unreadable(format!(
                "file is {} bytes, limit is {}",
                metadata.len(),
                MAX_FILE_SIZE_BYTES
            )));
        }

        let bytes = fs::read(&path).await.map_err(|e| unreadable(e.to_string()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.to_string());
        let mime_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(SelectedFile::new(name, mime_type, bytes))
    }
}

#[async_trait]
impl FileSelector for PathFileSelector {
    async fn select_files(&self, args: &str) -> Result<Vec<SelectedFile>, SelectionError> {
        let mut files = Vec::new();
        for raw in args.split_whitespace() {
            files.push(self.read_one(raw).await?);
        }
        Ok(files)
    }
}
