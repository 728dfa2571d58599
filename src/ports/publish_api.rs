//! Publish API Port - turns generated content into an assigned course.

use async_trait::async_trait;
use serde::Serialize;

use super::ApiError;
use crate::domain::foundation::{ContentId, CourseId, EmployeeId};

/// Port for the publish collaborator.
#[async_trait]
pub trait PublishApi: Send + Sync {
    /// Publishes content and enrolls the given employees.
    async fn publish(&self, request: PublishRequest) -> Result<PublishedCourse, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub content_id: ContentId,
    pub employee_ids: Vec<EmployeeId>,
    pub send_notification: bool,
    pub assignment_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedCourse {
    pub course_id: CourseId,
    pub enrollment_ids: Vec<String>,
    pub enrollment_count: u32,
}
