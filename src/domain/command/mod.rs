//! Command module - input classification, the command table and argument
//! extraction.

mod args;
mod kind;
mod parser;

pub use args::{extract_key_value, ArgKey};
pub use kind::CommandKind;
pub use parser::{parse_input, Command, ParsedInput};
