//! Course Designer - conversational assistant for building and assigning
//! training courses.
//!
//! Slash commands run multi-step workflows (upload, generate, publish,
//! bulk selection) against the HR backend; free text goes to the assistant
//! together with the selected employee's context.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
