//! Append-only message log.
//!
//! Insertion order is the only ordering guarantee the assistant offers. A
//! pending placeholder can be resolved (settled in place) or discarded, and
//! either happens at most once.

use thiserror::Error;

use super::message::{Message, Role};
use crate::domain::foundation::MessageId;

/// Errors from placeholder bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageLogError {
    #[error("Message not found: {0}")]
    NotFound(MessageId),

    #[error("Message {0} is not a loading placeholder")]
    NotPending(MessageId),
}

/// Ordered conversation record.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns its id.
    pub fn push(&mut self, message: Message) -> MessageId {
        let id = message.id();
        self.messages.push(message);
        id
    }

    /// Appends a loading placeholder and returns its id.
    pub fn push_pending(&mut self, role: Role) -> MessageId {
        self.push(Message::pending(role))
    }

    /// Replaces a placeholder with final content, keeping its position.
    pub fn resolve(
        &mut self,
        id: MessageId,
        content: impl Into<String>,
    ) -> Result<(), MessageLogError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or(MessageLogError::NotFound(id))?;

        if !message.is_loading() {
            return Err(MessageLogError::NotPending(id));
        }

        message.settle(content.into());
        Ok(())
    }

    /// Removes a placeholder without replacing it.
    pub fn discard(&mut self, id: MessageId) -> Result<Message, MessageLogError> {
        let index = self
            .messages
            .iter()
            .position(|m| m.id() == id)
            .ok_or(MessageLogError::NotFound(id))?;

        if !self.messages[index].is_loading() {
            return Err(MessageLogError::NotPending(id));
        }

        Ok(self.messages.remove(index))
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of unresolved placeholders.
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_loading()).count()
    }

    /// Messages appended after the first `offset` entries.
    pub fn since(&self, offset: usize) -> &[Message] {
        self.messages.get(offset..).unwrap_or(&[])
    }

    /// The last `limit` settled messages, oldest first.
    ///
    /// Placeholders are skipped, so the window only contains content that
    /// can be sent to the conversation collaborator.
    pub fn recent_final(&self, limit: usize) -> Vec<&Message> {
        let mut window: Vec<&Message> = self
            .messages
            .iter()
            .rev()
            .filter(|m| !m.is_loading())
            .take(limit)
            .collect();
        window.reverse();
        window
    }
}
