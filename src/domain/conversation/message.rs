//! Message entity for the assistant conversation.
//!
//! A message is either final (role + content) or a pending placeholder that
//! marks an in-flight response. The pending -> final transition is the only
//! mutation a message ever sees.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions.
    System,
    /// User input.
    User,
    /// Assistant response (including command handler output).
    Assistant,
}

impl Role {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Body of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MessageBody {
    /// Settled content.
    Final { role: Role, content: String },
    /// Loading placeholder awaiting a response.
    Pending { role: Role },
}

/// A message in the conversation log.
///
/// # Invariants
///
/// - `id` is unique within the log
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    body: MessageBody,
    created_at: Timestamp,
}

impl Message {
    /// Creates a final message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            body: MessageBody::Final {
                role,
                content: content.into(),
            },
            created_at: Timestamp::now(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a loading placeholder for the given role.
    pub fn pending(role: Role) -> Self {
        Self {
            id: MessageId::new(),
            body: MessageBody::Pending { role },
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the sender role regardless of state.
    pub fn role(&self) -> Role {
        match &self.body {
            MessageBody::Final { role, .. } | MessageBody::Pending { role } => *role,
        }
    }

    /// Returns the content, or `None` while the message is pending.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Final { content, .. } => Some(content),
            MessageBody::Pending { .. } => None,
        }
    }

    /// Returns true if this message is a loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self.body, MessageBody::Pending { .. })
    }

    /// Settles a pending message. Callers check `is_loading` first.
    pub(crate) fn settle(&mut self, content: String) {
        let role = self.role();
        self.body = MessageBody::Final { role, content };
    }
}
