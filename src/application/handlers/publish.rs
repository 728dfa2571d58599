//! PublishHandler - publishes generated content and enrolls the selected
//! employee.

use std::sync::Arc;

use tracing::instrument;

use super::TaskOutcome;
use crate::application::error::WorkflowError;
use crate::application::progress::ProgressTracker;
use crate::domain::employee::EmployeeContext;
use crate::domain::foundation::ContentId;
use crate::domain::workflow::{HandoffPayload, ProgressMarker, WorkflowKind};
use crate::ports::{Notification, PublishApi, PublishRequest};

pub const MISSING_EMPLOYEE: &str = "Please select an employee first before publishing a course.";
pub const MISSING_CONTENT: &str =
    "Please provide the content ID of the course to publish. Example: /publish <contentId>";

#[derive(Debug, Clone)]
pub struct PublishCommand<'a> {
    /// Content id from the arguments. Blank is rejected with guidance.
    pub content_id: &'a str,
    pub context: Option<&'a EmployeeContext>,
}

pub struct PublishHandler {
    api: Arc<dyn PublishApi>,
    assignment_message: String,
}

impl PublishHandler {
    pub fn new(api: Arc<dyn PublishApi>, assignment_message: impl Into<String>) -> Self {
        Self {
            api,
            assignment_message: assignment_message.into(),
        }
    }

    #[instrument(skip_all, fields(workflow = "publish"))]
    pub async fn handle(
        &self,
        cmd: PublishCommand<'_>,
        tracker: &mut ProgressTracker,
    ) -> Result<TaskOutcome, WorkflowError> {
        let context = cmd
            .context
            .ok_or_else(|| WorkflowError::guidance(MISSING_EMPLOYEE))?;

        let content_id = ContentId::new(cmd.content_id)
            .map_err(|_| WorkflowError::guidance(MISSING_CONTENT))?;

        tracker.begin(WorkflowKind::Publish);
        tracker.advance(ProgressMarker::Submitted, "Publishing course");

        let employee = context.employee();
        let request = PublishRequest {
            content_id: content_id.clone(),
            employee_ids: vec![employee.id.clone()],
            send_notification: true,
            assignment_message: self.assignment_message.clone(),
        };
        let published = self
            .api
            .publish(request)
            .await
            .map_err(|e| WorkflowError::api("publish the course", e))?;

        tracker.advance(ProgressMarker::Finalizing, "Course published");
        tracing::info!(
            course_id = %published.course_id,
            enrollments = published.enrollment_count,
            "course published"
        );

        let reply = format!(
            "Course published and assigned to {}. Enrollments created: {}.\nCourse ID: {}",
            employee.name, published.enrollment_count, published.course_id
        );
        Ok(TaskOutcome::Completed {
            reply,
            status: format!("Published {}", content_id),
            notification: Some(Notification::success(
                "Course published",
                format!("{} enrolled", employee.name),
            )),
            payload: HandoffPayload::Published {
                course_id: published.course_id,
                enrollment_ids: published.enrollment_ids,
                enrollment_count: published.enrollment_count,
            },
        })
    }
}
