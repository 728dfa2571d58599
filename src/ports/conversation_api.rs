//! Conversation API Port - free-text exchanges with the assistant backend.

use async_trait::async_trait;
use serde::Serialize;

use super::ApiError;
use crate::domain::conversation::{Message, Role};
use crate::domain::employee::ContextProjection;

/// Port for the conversation collaborator.
#[async_trait]
pub trait ConversationApi: Send + Sync {
    /// Sends the recent exchange and returns the assistant's answer.
    async fn respond(&self, request: ConversationRequest) -> Result<String, ApiError>;
}

/// A role/content pair as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    /// Converts a settled message. Placeholders have no content and yield `None`.
    pub fn from_message(message: &Message) -> Option<Self> {
        message.content().map(|content| Self {
            role: message.role(),
            content: content.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    pub messages: Vec<ChatTurn>,
    /// `null` when no employee is selected.
    pub employee_context: Option<ContextProjection>,
}
