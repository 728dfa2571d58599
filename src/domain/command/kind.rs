//! The fixed command surface.

use std::fmt;

/// A known slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Upload,
    Generate,
    Publish,
    Bulk,
    Employees,
    Departments,
    Positions,
    Courses,
}

/// Static token table. Tokens are matched after lower-casing.
const COMMAND_TABLE: &[(&str, CommandKind)] = &[
    ("/upload", CommandKind::Upload),
    ("/generate", CommandKind::Generate),
    ("/publish", CommandKind::Publish),
    ("/bulk", CommandKind::Bulk),
    ("/employees", CommandKind::Employees),
    ("/departments", CommandKind::Departments),
    ("/positions", CommandKind::Positions),
    ("/courses", CommandKind::Courses),
];

impl CommandKind {
    /// Looks up a command token. Unknown tokens return `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, kind)| *kind)
    }

    pub fn token(&self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(t, _)| *t)
            .unwrap_or("/")
    }

    /// All commands in table order.
    pub fn all() -> impl Iterator<Item = CommandKind> {
        COMMAND_TABLE.iter().map(|(_, kind)| *kind)
    }

    /// True for the read-only listing commands.
    pub fn is_listing(&self) -> bool {
        matches!(
            self,
            CommandKind::Employees
                | CommandKind::Departments
                | CommandKind::Positions
                | CommandKind::Courses
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
