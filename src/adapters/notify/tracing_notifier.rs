//! Notifier that writes notifications to the tracing pipeline.

use crate::ports::{Notification, Notifier, Severity};

#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            description,
            severity,
        } = notification;

        match severity {
            Severity::Error => tracing::warn!(%title, %description, "notification"),
            Severity::Success | Severity::Info => {
                tracing::info!(%title, %description, "notification")
            }
        }
    }
}
