//! HTTP implementation of the conversation port.

use async_trait::async_trait;
use serde::Deserialize;

use super::client::{decode, BackendClient};
use crate::ports::{require, ApiError, ConversationApi, ConversationRequest};

pub struct HttpConversationApi {
    client: BackendClient,
    path: String,
}

impl HttpConversationApi {
    pub fn new(client: BackendClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ConversationApi for HttpConversationApi {
    async fn respond(&self, request: ConversationRequest) -> Result<String, ApiError> {
        let value = self.client.post_json(&self.path, &request).await?;
        let reply: ChatReply = decode(value)?;
        require(reply.response, "response")
    }
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: Option<String>,
}
