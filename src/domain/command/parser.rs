//! Input classification.
//!
//! Anything starting with `/` is a command: the token runs up to the first
//! whitespace and is lower-cased, the rest of the line is the argument
//! string. There is no quoting or escaping.

/// A slash command split into token and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    raw: String,
    token: String,
    args: String,
}

impl Command {
    /// Lower-cased leading word, including the `/`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Remainder of the input after the token, trimmed.
    pub fn args(&self) -> &str {
        &self.args
    }

    /// The trimmed input as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Classified user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    /// Nothing but whitespace.
    Empty,
    /// Slash command.
    Command(Command),
    /// Anything else.
    FreeText(String),
}

impl ParsedInput {
    pub fn is_command(&self) -> bool {
        matches!(self, ParsedInput::Command(_))
    }
}

/// Classifies raw input as a command or free text.
pub fn parse_input(raw: &str) -> ParsedInput {
    let text = raw.trim();
    if text.is_empty() {
        return ParsedInput::Empty;
    }

    if !text.starts_with('/') {
        return ParsedInput::FreeText(text.to_string());
    }

    let (token, args) = match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim()),
        None => (text, ""),
    };

    ParsedInput::Command(Command {
        raw: text.to_string(),
        token: token.to_lowercase(),
        args: args.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn command(raw: &str) -> Command {
        match parse_input(raw) {
            ParsedInput::Command(cmd) => cmd,
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(parse_input(""), ParsedInput::Empty);
        assert_eq!(parse_input("  \n\t "), ParsedInput::Empty);
    }

    #[test]
    fn plain_text_is_free_text() {
        assert_eq!(
            parse_input("  What skills does Jane have? "),
            ParsedInput::FreeText("What skills does Jane have?".to_string())
        );
    }

    #[test]
    fn token_is_lowercased_and_args_trimmed() {
        let cmd = command("/Generate   Intro to SQL  ");
        assert_eq!(cmd.token(), "/generate");
        assert_eq!(cmd.args(), "Intro to SQL");
    }

    #[test]
    fn command_without_args_has_empty_args() {
        let cmd = command("/upload");
        assert_eq!(cmd.token(), "/upload");
        assert_eq!(cmd.args(), "");
    }

    #[test]
    fn args_keep_their_case() {
        let cmd = command("/publish AbC123");
        assert_eq!(cmd.args(), "AbC123");
    }

    #[test]
    fn tab_separates_token() {
        let cmd = command("/bulk\tby:position");
        assert_eq!(cmd.token(), "/bulk");
        assert_eq!(cmd.args(), "by:position");
    }

    #[test]
    fn quotes_are_not_interpreted() {
        let cmd = command("/generate \"Data  Basics\"");
        assert_eq!(cmd.args(), "\"Data  Basics\"");
    }

    proptest! {
        #[test]
        fn non_slash_input_is_never_a_command(s in "[^/\\s][^\\n]{0,40}") {
            prop_assert!(!parse_input(&s).is_command());
        }

        #[test]
        fn slash_token_is_lowercased_prefix(word in "[A-Za-z0-9:_-]{0,12}", rest in "[ \\t][^\\n]{0,30}") {
            let raw = format!("/{}{}", word, rest);
            let cmd = command(&raw);
            let expected = format!("/{}", word).to_lowercase();
            prop_assert_eq!(cmd.token(), expected.as_str());
        }
    }
}
