//! Mock adapters for tests.
//!
//! Each mock records its calls so tests can assert on what was (or was not)
//! sent to a collaborator.

mod content_api;
mod conversation_api;
mod directory;
mod file_selector;
mod notifier;
mod profile_store;

pub use content_api::MockContentApi;
pub use conversation_api::MockConversationApi;
pub use directory::{DirectoryCall, InMemoryDirectory};
pub use file_selector::StaticFileSelector;
pub use notifier::RecordingNotifier;
pub use profile_store::InMemoryProfileStore;
