//! Upload API Port - stores course source material.

use async_trait::async_trait;
use serde::Serialize;

use super::ApiError;
use crate::domain::foundation::UploadId;

/// Port for the upload collaborator.
#[async_trait]
pub trait UploadApi: Send + Sync {
    /// Stores one file and returns its identifier.
    async fn upload(&self, request: UploadRequest) -> Result<UploadId, ApiError>;
}

/// One file, already encoded for transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Base64 (standard alphabet, padded) file content.
    pub file_base64: String,
    pub file_name: String,
    /// MIME type of the file.
    pub file_type: String,
}
