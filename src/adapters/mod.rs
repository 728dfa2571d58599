//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Backend collaborators over HTTP (content, conversation, HR REST, knowledge)
//! - `knowledge` - Simulated knowledge source
//! - `files` - Filesystem file selection for uploads
//! - `notify` - Notification sink writing to tracing
//! - `mock` - In-memory implementations with call tracking, for tests

pub mod files;
pub mod http;
pub mod knowledge;
pub mod mock;
pub mod notify;

pub use files::PathFileSelector;
pub use http::{
    BackendClient, BackendClientConfig, ContentPaths, HrRestStore, HttpContentApi,
    HttpConversationApi, HttpKnowledgeSource,
};
pub use knowledge::SimulatedKnowledgeSource;
pub use notify::TracingNotifier;
