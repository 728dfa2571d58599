//! File selection adapters.

mod path_selector;

pub use path_selector::PathFileSelector;
