//! Minimal `key:value` argument extraction.
//!
//! Each supported key has its own pattern and is scanned for independently,
//! so unknown keys and stray words are simply ignored.

use once_cell::sync::Lazy;
use regex::Regex;

static BY_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)by:(\S+)").expect("literal pattern is valid"));

/// Keys understood by the argument extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKey {
    /// `by:<dimension>` for bulk grouping.
    By,
}

impl ArgKey {
    fn pattern(&self) -> &'static Regex {
        match self {
            ArgKey::By => &*BY_KEY,
        }
    }
}

/// Returns the lower-cased value of the first `key:value` pair, if present.
pub fn extract_key_value(args: &str, key: ArgKey) -> Option<String> {
    key.pattern()
        .captures(args)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}
