//! HTTP adapters for the backend collaborators.
//!
//! Every adapter shares one `BackendClient`, which carries the base URL,
//! the API key headers and the transport timeout.

mod client;
mod content_api;
mod conversation_api;
mod hr_rest;
mod knowledge;

pub use client::{decode, BackendClient, BackendClientConfig};
pub use content_api::{ContentPaths, HttpContentApi};
pub use conversation_api::HttpConversationApi;
pub use hr_rest::HrRestStore;
pub use knowledge::HttpKnowledgeSource;
