//! Hand-off payloads passed from one workflow to the next.

use serde::{Deserialize, Serialize};

use super::phase::WorkflowKind;
use crate::domain::course::CourseStructure;
use crate::domain::directory::{GroupDimension, GroupSummary};
use crate::domain::foundation::{ContentId, CourseId, UploadId};

/// Result of a completed workflow, one variant per producing kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandoffPayload {
    /// Files stored by `/upload`, in upload order.
    Uploaded { upload_ids: Vec<UploadId> },

    /// Content created by `/generate`, ready for `/publish`.
    Generated {
        content_id: ContentId,
        title: String,
        course_structure: CourseStructure,
    },

    /// Enrollment created by `/publish`.
    Published {
        course_id: CourseId,
        enrollment_ids: Vec<String>,
        enrollment_count: u32,
    },

    /// Groups offered by `/bulk`.
    GroupSelection {
        group_type: GroupDimension,
        groups: Vec<GroupSummary>,
        selected_group: Option<GroupSummary>,
    },
}

impl HandoffPayload {
    /// The workflow kind that produces this payload.
    pub fn kind(&self) -> WorkflowKind {
        match self {
            HandoffPayload::Uploaded { .. } => WorkflowKind::Upload,
            HandoffPayload::Generated { .. } => WorkflowKind::Generate,
            HandoffPayload::Published { .. } => WorkflowKind::Publish,
            HandoffPayload::GroupSelection { .. } => WorkflowKind::Bulk,
        }
    }

    pub fn upload_ids(&self) -> Option<&[UploadId]> {
        match self {
            HandoffPayload::Uploaded { upload_ids } => Some(upload_ids),
            _ => None,
        }
    }

    pub fn content_id(&self) -> Option<&ContentId> {
        match self {
            HandoffPayload::Generated { content_id, .. } => Some(content_id),
            _ => None,
        }
    }

    /// Consumes the payload, keeping upload ids if it carried any.
    pub fn into_upload_ids(self) -> Vec<UploadId> {
        match self {
            HandoffPayload::Uploaded { upload_ids } => upload_ids,
            _ => Vec::new(),
        }
    }
}
