//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Content Ports
//!
//! - `UploadApi` - Stores source material for a course
//! - `GenerationApi` - Generates course content for an employee
//! - `PublishApi` - Publishes content and enrolls employees
//! - `ConversationApi` - Free-text exchange with the assistant backend
//!
//! ## HR Data Ports
//!
//! - `Directory` - Employee and group listings
//! - `ProfileReader` - Employee profile, skills and enrollments
//! - `KnowledgeSource` - Knowledge base, gaps and resources
//!
//! ## Front-end Ports
//!
//! - `FileSelector` - Files chosen for an upload
//! - `Notifier` - Toast-style notifications

mod api_error;
mod conversation_api;
mod directory;
mod file_selector;
mod generation_api;
mod knowledge_source;
mod notifier;
mod profile_reader;
mod publish_api;
mod upload_api;

pub use api_error::{require, ApiError};
pub use conversation_api::{ChatTurn, ConversationApi, ConversationRequest};
pub use directory::Directory;
pub use file_selector::{FileSelector, SelectedFile, SelectionError};
pub use generation_api::{GeneratedCourse, GenerationApi, GenerationRequest};
pub use knowledge_source::KnowledgeSource;
pub use notifier::{Notification, Notifier, Severity};
pub use profile_reader::ProfileReader;
pub use publish_api::{PublishApi, PublishRequest, PublishedCourse};
pub use upload_api::{UploadApi, UploadRequest};
