//! HTTP implementation of the upload, generation and publish ports.
//!
//! All three endpoints answer `{ success, ..., error? }`. A `success: false`
//! reply becomes `ApiError::Rejected` carrying the server's error string.

use async_trait::async_trait;
use serde::Deserialize;

use super::client::{decode, BackendClient};
use crate::domain::course::CourseStructure;
use crate::domain::foundation::{ContentId, CourseId, UploadId};
use crate::ports::{
    require, ApiError, GeneratedCourse, GenerationApi, GenerationRequest, PublishApi,
    PublishRequest, PublishedCourse, UploadApi, UploadRequest,
};

/// Endpoint paths relative to the backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    pub upload: String,
    pub generate: String,
    pub publish: String,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            upload: "/api/hr/courses/upload".to_string(),
            generate: "/api/hr/courses/generate".to_string(),
            publish: "/api/hr/courses/publish".to_string(),
        }
    }
}

/// Course content collaborator over HTTP.
pub struct HttpContentApi {
    client: BackendClient,
    paths: ContentPaths,
}

impl HttpContentApi {
    pub fn new(client: BackendClient, paths: ContentPaths) -> Self {
        Self { client, paths }
    }
}

#[async_trait]
impl UploadApi for HttpContentApi {
    async fn upload(&self, request: UploadRequest) -> Result<UploadId, ApiError> {
        let value = self.client.post_json(&self.paths.upload, &request).await?;
        let reply: UploadReply = decode(value)?;
        ensure_success(reply.success, reply.error)?;

        let upload_id = require(reply.upload_id, "uploadId")?;
        UploadId::new(upload_id).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
    }
}

#[async_trait]
impl GenerationApi for HttpContentApi {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedCourse, ApiError> {
        let value = self.client.post_json(&self.paths.generate, &request).await?;
        let reply: GenerateReply = decode(value)?;
        ensure_success(reply.success, reply.error)?;

        let content_id = require(reply.content_id, "contentId")?;
        Ok(GeneratedCourse {
            content_id: ContentId::new(content_id)
                .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?,
            title: reply.title.unwrap_or(request.title),
            course_structure: reply.course_structure.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl PublishApi for HttpContentApi {
    async fn publish(&self, request: PublishRequest) -> Result<PublishedCourse, ApiError> {
        let value = self.client.post_json(&self.paths.publish, &request).await?;
        let reply: PublishReply = decode(value)?;
        ensure_success(reply.success, reply.error)?;

        let course_id = require(reply.course_id, "courseId")?;
        let enrollment_count = reply
            .enrollment_count
            .unwrap_or(reply.enrollment_ids.len() as u32);
        Ok(PublishedCourse {
            course_id: CourseId::new(course_id)
                .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?,
            enrollment_ids: reply.enrollment_ids,
            enrollment_count,
        })
    }
}

fn ensure_success(success: Option<bool>, error: Option<String>) -> Result<(), ApiError> {
    match success {
        Some(false) => Err(ApiError::rejected(error)),
        _ => Ok(()),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadReply {
    success: Option<bool>,
    upload_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateReply {
    success: Option<bool>,
    content_id: Option<String>,
    title: Option<String>,
    course_structure: Option<CourseStructure>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishReply {
    success: Option<bool>,
    course_id: Option<String>,
    #[serde(default)]
    enrollment_ids: Vec<String>,
    enrollment_count: Option<u32>,
    error: Option<String>,
}
