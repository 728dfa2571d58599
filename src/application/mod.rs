//! Application layer - the session, its command handlers and the progress
//! tracker they drive.
//!
//! Handlers orchestrate domain operations and talk to collaborators only
//! through [`crate::ports`].

pub mod context_loader;
pub mod error;
pub mod handlers;
pub mod progress;
pub mod router;
pub mod session;

pub use context_loader::EmployeeContextLoader;
pub use error::{ContextError, WorkflowError};
pub use handlers::{ListingKind, TaskOutcome};
pub use progress::ProgressTracker;
pub use router::{CommandRouter, Route, WorkflowCommand};
pub use session::{AssistantSession, SessionPorts, SessionSettings};
