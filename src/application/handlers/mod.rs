//! Application handlers.
//!
//! Task handlers validate their input, drive the `ProgressTracker` through
//! the checkpoints of one workflow and return what the session should
//! record. Guidance is checked before a workflow begins, so a rejected
//! command never consumes the previous hand-off payload.

mod bulk;
mod conversation;
mod generate;
mod listing;
mod publish;
mod upload;

pub use bulk::{BulkCommand, BulkHandler};
pub use conversation::{fallback_message, ConversationHandler};
pub use generate::{GenerateCommand, GenerateHandler, GenerateSettings};
pub use listing::{ListingHandler, ListingKind};
pub use publish::{PublishCommand, PublishHandler};
pub use upload::{UploadCommand, UploadHandler};

use crate::domain::workflow::HandoffPayload;
use crate::ports::Notification;

/// Successful end of a task handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The workflow produced a hand-off payload.
    Completed {
        reply: String,
        status: String,
        payload: HandoffPayload,
        notification: Option<Notification>,
    },
    /// The workflow ended without a result, e.g. a canceled upload.
    Abandoned { reply: String },
}
