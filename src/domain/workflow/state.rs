//! WorkflowState - the single record describing the in-flight operation.

use serde::Serialize;

use super::payload::HandoffPayload;
use super::phase::{ProgressMarker, WorkflowKind, WorkflowPhase};
use crate::domain::foundation::{Percentage, StateMachine};

/// State of the current (or last) workflow.
///
/// # Invariants
///
/// - `processing` is true exactly while the phase is Starting or InProgress
/// - progress is 0 when a run starts and never decreases until the run ends
/// - a payload is only present after completion
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WorkflowState {
    processing: bool,
    kind: WorkflowKind,
    phase: WorkflowPhase,
    progress: Percentage,
    status: String,
    payload: Option<HandoffPayload>,
}

impl WorkflowState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn progress(&self) -> Percentage {
        self.progress
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn payload(&self) -> Option<&HandoffPayload> {
        self.payload.as_ref()
    }

    /// Owned copy for observers.
    pub fn snapshot(&self) -> WorkflowState {
        self.clone()
    }

    /// Starts a new run of `kind`.
    ///
    /// A settled previous run is reset to idle first. The previous payload is
    /// returned by value so exactly one workflow can consume it.
    pub fn begin(&mut self, kind: WorkflowKind) -> Option<HandoffPayload> {
        let previous = self.payload.take();
        if self.phase != WorkflowPhase::Idle {
            self.set_phase(WorkflowPhase::Idle);
        }

        self.set_phase(WorkflowPhase::Starting);
        self.processing = true;
        self.kind = kind;
        self.progress = ProgressMarker::Started.value();
        self.status = format!("Starting {}", kind.as_str());
        previous
    }

    /// Records a checkpoint. Progress never moves backwards.
    pub fn advance(&mut self, marker: ProgressMarker, status: impl Into<String>) {
        if !self.phase.is_active() {
            return;
        }
        if self.phase == WorkflowPhase::Starting {
            self.set_phase(WorkflowPhase::InProgress);
        }

        let target = marker.value().min(Percentage::new(99));
        self.progress = self.progress.max(target);
        self.status = status.into();
    }

    /// Ends the run successfully, storing its hand-off payload.
    pub fn complete(&mut self, payload: HandoffPayload, status: impl Into<String>) {
        self.set_phase(WorkflowPhase::Completed);
        self.processing = false;
        self.progress = ProgressMarker::Complete.value();
        self.status = status.into();
        self.payload = Some(payload);
    }

    /// Ends the run with an error. Progress drops back to 0.
    pub fn fail(&mut self, status: impl Into<String>) {
        self.set_phase(WorkflowPhase::Failed);
        self.processing = false;
        self.kind = WorkflowKind::None;
        self.progress = Percentage::ZERO;
        self.status = status.into();
        self.payload = None;
    }

    /// Abandons the run (or clears a settled one) and returns to idle.
    pub fn reset(&mut self) {
        if self.phase != WorkflowPhase::Idle {
            self.set_phase(WorkflowPhase::Idle);
        }
        self.processing = false;
        self.kind = WorkflowKind::None;
        self.progress = Percentage::ZERO;
        self.status.clear();
        self.payload = None;
    }

    fn set_phase(&mut self, target: WorkflowPhase) {
        // Overlapping starts are not guarded here, so an out-of-order
        // transition is logged and applied anyway.
        if let Err(err) = self.phase.transition_to(target) {
            tracing::debug!(error = %err, "forcing workflow phase transition");
        }
        self.phase = target;
    }
}
