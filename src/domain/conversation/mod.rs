//! Conversation module - the message log the assistant appends to.

mod log;
mod message;

pub use log::{MessageLog, MessageLogError};
pub use message::{Message, MessageBody, Role};
