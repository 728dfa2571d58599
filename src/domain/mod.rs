//! Domain layer - the vocabulary of the course designer assistant.
//!
//! Nothing in here performs I/O. Collaborators are reached through
//! [`crate::ports`].

pub mod command;
pub mod conversation;
pub mod course;
pub mod directory;
pub mod employee;
pub mod foundation;
pub mod workflow;
