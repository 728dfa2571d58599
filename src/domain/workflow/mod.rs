//! Workflow module - state machine for multi-step commands and the payloads
//! they hand to each other.

mod payload;
mod phase;
mod state;

pub use payload::HandoffPayload;
pub use phase::{ProgressMarker, WorkflowKind, WorkflowPhase};
pub use state::WorkflowState;
