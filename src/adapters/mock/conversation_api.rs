//! Mock conversation collaborator.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ApiError, ConversationApi, ConversationRequest};

#[derive(Debug, Clone, Default)]
pub struct MockConversationApi {
    responses: Arc<Mutex<VecDeque<Result<String, ApiError>>>>,
    calls: Arc<Mutex<Vec<ConversationRequest>>>,
}

impl MockConversationApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful answer to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(content.into()));
        self
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: ApiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<ConversationRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<ConversationRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ConversationApi for MockConversationApi {
    async fn respond(&self, request: ConversationRequest) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()))
    }
}
