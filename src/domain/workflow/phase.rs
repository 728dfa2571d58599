//! Workflow lifecycle phases and progress markers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, StateMachine};

/// Which multi-step operation a workflow runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    #[default]
    None,
    Upload,
    Generate,
    Publish,
    Bulk,
}

impl WorkflowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowKind::None => "none",
            WorkflowKind::Upload => "upload",
            WorkflowKind::Generate => "generate",
            WorkflowKind::Publish => "publish",
            WorkflowKind::Bulk => "bulk",
        }
    }
}

/// Lifecycle of a workflow.
///
/// - `Idle`: nothing running
/// - `Starting`: command accepted, progress 0
/// - `InProgress`: between checkpoints, progress 1..=99
/// - `Completed`: progress 100, hand-off payload populated
/// - `Failed`: progress 0, diagnostic appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Starting,
    InProgress,
    Completed,
    Failed,
}

impl WorkflowPhase {
    /// True while a handler is running.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Starting | Self::InProgress)
    }
}

impl StateMachine for WorkflowPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use WorkflowPhase::*;
        match self {
            Idle => vec![Starting],
            // Guidance or an empty selection abandons the run.
            Starting => vec![InProgress, Completed, Failed, Idle],
            InProgress => vec![Completed, Failed, Idle],
            Completed => vec![Idle],
            Failed => vec![Idle],
        }
    }
}

/// Fixed checkpoints handlers report progress at.
///
/// These are phase markers chosen per step, not measurements of I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProgressMarker {
    Started,
    Preparing,
    Submitted,
    Processing,
    Finalizing,
    Complete,
}

impl ProgressMarker {
    pub const fn value(&self) -> Percentage {
        match self {
            ProgressMarker::Started => Percentage::new(0),
            ProgressMarker::Preparing => Percentage::new(10),
            ProgressMarker::Submitted => Percentage::new(30),
            ProgressMarker::Processing => Percentage::new(60),
            ProgressMarker::Finalizing => Percentage::new(70),
            ProgressMarker::Complete => Percentage::new(100),
        }
    }
}
