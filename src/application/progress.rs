//! ProgressTracker - WorkflowState plus a watch channel for observers.
//!
//! Every mutation publishes a snapshot, so a front end sees progress while
//! a handler is suspended on I/O. The channel keeps only the latest value.

use tokio::sync::watch;

use crate::domain::workflow::{HandoffPayload, ProgressMarker, WorkflowKind, WorkflowState};

#[derive(Debug)]
pub struct ProgressTracker {
    state: WorkflowState,
    tx: watch::Sender<WorkflowState>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        let state = WorkflowState::idle();
        let (tx, _rx) = watch::channel(state.clone());
        Self { state, tx }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing()
    }

    /// New receiver that starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.tx.subscribe()
    }

    pub fn begin(&mut self, kind: WorkflowKind) -> Option<HandoffPayload> {
        let previous = self.state.begin(kind);
        self.publish();
        previous
    }

    pub fn advance(&mut self, marker: ProgressMarker, status: impl Into<String>) {
        self.state.advance(marker, status);
        self.publish();
    }

    pub fn complete(&mut self, payload: HandoffPayload, status: impl Into<String>) {
        self.state.complete(payload, status);
        self.publish();
    }

    pub fn fail(&mut self, status: impl Into<String>) {
        self.state.fail(status);
        self.publish();
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.state.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Percentage, UploadId};
    use crate::domain::workflow::WorkflowPhase;

    #[test]
    fn publishes_without_subscribers() {
        let mut tracker = ProgressTracker::new();
        tracker.begin(WorkflowKind::Upload);
        tracker.advance(ProgressMarker::Processing, "Uploading");

        let rx = tracker.subscribe();
        assert_eq!(rx.borrow().progress(), Percentage::new(60));
    }

    #[tokio::test]
    async fn subscriber_sees_each_change() {
        let mut tracker = ProgressTracker::new();
        let mut rx = tracker.subscribe();

        tracker.begin(WorkflowKind::Upload);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase(), WorkflowPhase::Starting);

        tracker.complete(
            HandoffPayload::Uploaded {
                upload_ids: vec![UploadId::new("u1").unwrap()],
            },
            "Uploaded",
        );
        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        assert_eq!(state.progress(), Percentage::HUNDRED);
        assert!(!state.is_processing());
    }

    #[test]
    fn observed_progress_never_decreases_within_a_run() {
        let mut tracker = ProgressTracker::new();
        let mut rx = tracker.subscribe();
        let mut seen = Vec::new();

        tracker.begin(WorkflowKind::Generate);
        seen.push(rx.borrow_and_update().progress());
        for marker in [
            ProgressMarker::Preparing,
            ProgressMarker::Finalizing,
            ProgressMarker::Submitted,
            ProgressMarker::Processing,
            ProgressMarker::Complete,
        ] {
            tracker.advance(marker, format!("{:?}", marker));
            seen.push(rx.borrow_and_update().progress());
        }
        tracker.complete(
            HandoffPayload::Uploaded {
                upload_ids: vec![UploadId::new("u1").unwrap()],
            },
            "Done",
        );
        seen.push(rx.borrow_and_update().progress());

        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{:?}", seen);
        assert_eq!(seen.first(), Some(&Percentage::ZERO));
        assert_eq!(seen.last(), Some(&Percentage::HUNDRED));

        tracker.begin(WorkflowKind::Upload);
        assert_eq!(rx.borrow_and_update().progress(), Percentage::ZERO);
    }

    #[test]
    fn reset_publishes_idle() {
        let mut tracker = ProgressTracker::new();
        let rx = tracker.subscribe();
        tracker.begin(WorkflowKind::Bulk);
        tracker.reset();

        assert_eq!(*rx.borrow(), WorkflowState::idle());
    }
}
