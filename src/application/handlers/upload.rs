//! UploadHandler - sends selected files to the upload collaborator.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::instrument;

use super::TaskOutcome;
use crate::application::error::WorkflowError;
use crate::application::progress::ProgressTracker;
use crate::domain::workflow::{HandoffPayload, ProgressMarker, WorkflowKind};
use crate::ports::{FileSelector, Notification, UploadApi, UploadRequest};

#[derive(Debug, Clone)]
pub struct UploadCommand {
    /// Raw `/upload` arguments, passed to the file selector.
    pub args: String,
}

pub struct UploadHandler {
    api: Arc<dyn UploadApi>,
    files: Arc<dyn FileSelector>,
}

impl UploadHandler {
    pub fn new(api: Arc<dyn UploadApi>, files: Arc<dyn FileSelector>) -> Self {
        Self { api, files }
    }

    /// Uploads files one at a time. The first failure aborts the batch.
    #[instrument(skip_all, fields(workflow = "upload"))]
    pub async fn handle(
        &self,
        cmd: UploadCommand,
        tracker: &mut ProgressTracker,
    ) -> Result<TaskOutcome, WorkflowError> {
        tracker.begin(WorkflowKind::Upload);

        let selected = self.files.select_files(&cmd.args).await?;
        if selected.is_empty() {
            tracing::debug!("no files selected");
            return Ok(TaskOutcome::Abandoned {
                reply: "File upload canceled.".to_string(),
            });
        }

        let total = selected.len();
        tracker.advance(
            ProgressMarker::Preparing,
            format!("Preparing {} file(s)", total),
        );

        let mut upload_ids = Vec::with_capacity(total);
        let mut names = Vec::with_capacity(total);
        for (index, file) in selected.into_iter().enumerate() {
            tracker.advance(
                ProgressMarker::Processing,
                format!("Uploading {} ({}/{})", file.name, index + 1, total),
            );

            let request = UploadRequest {
                file_base64: STANDARD.encode(&file.bytes),
                file_name: file.name.clone(),
                file_type: file.mime_type,
            };
            let upload_id = self
                .api
                .upload(request)
                .await
                .map_err(|e| WorkflowError::api(format!("upload {}", file.name), e))?;

            upload_ids.push(upload_id);
            names.push(file.name);
        }

        tracker.advance(ProgressMarker::Finalizing, "Upload finished");
        tracing::info!(files = total, "files uploaded");

        let reply = format!(
            "Uploaded {} file(s): {}.\nYou can now generate a course from this material with /generate <course title>.",
            total,
            names.join(", ")
        );
        Ok(TaskOutcome::Completed {
            reply,
            status: format!("Uploaded {} file(s)", total),
            payload: HandoffPayload::Uploaded { upload_ids },
            notification: Some(Notification::success(
                "Upload complete",
                format!("{} file(s) uploaded", total),
            )),
        })
    }
}
