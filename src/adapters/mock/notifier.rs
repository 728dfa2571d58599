//! Notifier that keeps every notification for inspection.

use std::sync::{Arc, Mutex};

use crate::ports::{Notification, Notifier, Severity};

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}
