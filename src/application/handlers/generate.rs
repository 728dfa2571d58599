//! GenerateHandler - creates personalized course content for the selected
//! employee.

use std::sync::Arc;

use tracing::instrument;

use super::TaskOutcome;
use crate::application::error::WorkflowError;
use crate::application::progress::ProgressTracker;
use crate::domain::employee::EmployeeContext;
use crate::domain::workflow::{HandoffPayload, ProgressMarker, WorkflowKind};
use crate::ports::{GenerationApi, GenerationRequest, Notification};

pub const MISSING_TITLE: &str =
    "Please provide a title for the course you want to generate. Example: /generate Advanced SQL for Analysts";
pub const MISSING_EMPLOYEE: &str = "Please select an employee first before generating a course.";

/// Request parameters that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub difficulty_level: String,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            difficulty_level: "intermediate".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateCommand<'a> {
    pub title: &'a str,
    pub context: Option<&'a EmployeeContext>,
}

pub struct GenerateHandler {
    api: Arc<dyn GenerationApi>,
    settings: GenerateSettings,
}

impl GenerateHandler {
    pub fn new(api: Arc<dyn GenerationApi>, settings: GenerateSettings) -> Self {
        Self { api, settings }
    }

    #[instrument(skip_all, fields(workflow = "generate"))]
    pub async fn handle(
        &self,
        cmd: GenerateCommand<'_>,
        tracker: &mut ProgressTracker,
    ) -> Result<TaskOutcome, WorkflowError> {
        let title = cmd.title.trim();
        if title.is_empty() {
            return Err(WorkflowError::guidance(MISSING_TITLE));
        }
        let context = cmd
            .context
            .ok_or_else(|| WorkflowError::guidance(MISSING_EMPLOYEE))?;

        let upload_ids = tracker
            .begin(WorkflowKind::Generate)
            .map(|previous| previous.into_upload_ids())
            .unwrap_or_default();

        tracker.advance(ProgressMarker::Preparing, "Preparing course request");
        let request = GenerationRequest {
            employee_id: context.employee_id().clone(),
            title: title.to_string(),
            description: self.describe(title, context),
            skills_to_address: context.missing_skill_names(),
            difficulty_level: self.settings.difficulty_level.clone(),
            upload_ids,
        };

        tracker.advance(ProgressMarker::Submitted, "Generating course content");
        let generated = self
            .api
            .generate(request)
            .await
            .map_err(|e| WorkflowError::api("generate the course", e))?;

        tracker.advance(ProgressMarker::Finalizing, "Preparing course outline");
        tracing::info!(content_id = %generated.content_id, "course generated");

        let structure = &generated.course_structure;
        let mut reply = format!(
            "Course \"{}\" generated for {} with {} module(s):\n",
            generated.title,
            context.employee().name,
            structure.module_count()
        );
        if structure.module_count() > 0 {
            reply.push_str(&structure.render_outline());
            reply.push('\n');
        }
        reply.push_str(&format!(
            "\nContent ID: {id}\nTo assign it, run: /publish {id}",
            id = generated.content_id
        ));

        Ok(TaskOutcome::Completed {
            reply,
            status: format!("Generated \"{}\"", generated.title),
            notification: Some(Notification::success(
                "Course generated",
                generated.title.clone(),
            )),
            payload: HandoffPayload::Generated {
                content_id: generated.content_id,
                title: generated.title,
                course_structure: generated.course_structure,
            },
        })
    }

    fn describe(&self, title: &str, context: &EmployeeContext) -> String {
        let employee = context.employee();
        let role = employee.position.as_deref().unwrap_or("their role");
        let gaps = context.missing_skill_names();

        if gaps.is_empty() {
            format!(
                "A {} course on {} for {}, {}.",
                self.settings.difficulty_level, title, employee.name, role
            )
        } else {
            format!(
                "A {} course on {} for {}, {}, addressing: {}.",
                self.settings.difficulty_level,
                title,
                employee.name,
                role,
                gaps.join(", ")
            )
        }
    }
}
