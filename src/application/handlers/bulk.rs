//! BulkHandler - offers employee groups for bulk course assignment.

use std::sync::Arc;

use tracing::instrument;

use super::TaskOutcome;
use crate::application::error::WorkflowError;
use crate::application::progress::ProgressTracker;
use crate::domain::command::{extract_key_value, ArgKey};
use crate::domain::directory::{GroupDimension, GroupSummary};
use crate::domain::workflow::{HandoffPayload, ProgressMarker, WorkflowKind};
use crate::ports::Directory;

pub const MISSING_DIMENSION: &str = "Please choose how to group employees: /bulk by:position, /bulk by:department or /bulk by:course";

#[derive(Debug, Clone)]
pub struct BulkCommand {
    pub args: String,
}

pub struct BulkHandler {
    directory: Arc<dyn Directory>,
}

impl BulkHandler {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    #[instrument(skip_all, fields(workflow = "bulk"))]
    pub async fn handle(
        &self,
        cmd: BulkCommand,
        tracker: &mut ProgressTracker,
    ) -> Result<TaskOutcome, WorkflowError> {
        let dimension = extract_key_value(&cmd.args, ArgKey::By)
            .and_then(|value| value.parse::<GroupDimension>().ok())
            .ok_or_else(|| WorkflowError::guidance(MISSING_DIMENSION))?;

        tracker.begin(WorkflowKind::Bulk);
        tracker.advance(
            ProgressMarker::Submitted,
            format!("Loading {}", dimension.plural()),
        );

        let groups = self
            .directory
            .list_groups(dimension)
            .await
            .map_err(|e| WorkflowError::api(format!("load {}", dimension.plural()), e))?;

        tracker.advance(ProgressMarker::Finalizing, "Groups loaded");
        tracing::info!(dimension = %dimension, groups = groups.len(), "groups loaded");

        let reply = render_selection(dimension, &groups);
        Ok(TaskOutcome::Completed {
            reply,
            status: format!("{} {} available", groups.len(), dimension.plural()),
            notification: None,
            payload: HandoffPayload::GroupSelection {
                group_type: dimension,
                groups,
                selected_group: None,
            },
        })
    }
}

fn render_selection(dimension: GroupDimension, groups: &[GroupSummary]) -> String {
    if groups.is_empty() {
        return format!("No {} found.", dimension.plural());
    }

    let lines: Vec<String> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            format!(
                "{}. {} ({} {})",
                i + 1,
                g.name,
                g.member_count,
                dimension.member_noun()
            )
        })
        .collect();

    format!(
        "Select a {} to assign a course to:\n{}",
        dimension,
        lines.join("\n")
    )
}
