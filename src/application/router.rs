//! CommandRouter - maps parsed input to a workflow, a listing or the
//! conversation path.

use super::handlers::ListingKind;
use crate::domain::command::{CommandKind, ParsedInput};
use crate::domain::directory::GroupDimension;
use crate::domain::workflow::WorkflowKind;

/// A command that runs a workflow, with its raw argument string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    Upload(String),
    Generate(String),
    Publish(String),
    Bulk(String),
}

impl WorkflowCommand {
    pub fn kind(&self) -> WorkflowKind {
        match self {
            WorkflowCommand::Upload(_) => WorkflowKind::Upload,
            WorkflowCommand::Generate(_) => WorkflowKind::Generate,
            WorkflowCommand::Publish(_) => WorkflowKind::Publish,
            WorkflowCommand::Bulk(_) => WorkflowKind::Bulk,
        }
    }
}

/// Where an input goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A workflow command.
    Task(WorkflowCommand),
    /// A read-only listing. Never touches workflow state.
    Listing(ListingKind),
    /// Free text, including unknown commands, for the assistant.
    Conversation(String),
    /// Nothing to do.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRouter;

impl CommandRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, input: &ParsedInput) -> Route {
        match input {
            ParsedInput::Empty => Route::Ignore,
            ParsedInput::FreeText(text) => Route::Conversation(text.clone()),
            ParsedInput::Command(command) => match CommandKind::from_token(command.token()) {
                Some(kind) => {
                    tracing::debug!(command = %kind, "routing to command handler");
                    command_route(kind, command.args().to_string())
                }
                None => {
                    tracing::debug!(
                        token = command.token(),
                        "unknown command, routing to conversation"
                    );
                    Route::Conversation(command.raw().to_string())
                }
            },
        }
    }
}

fn command_route(kind: CommandKind, args: String) -> Route {
    match kind {
        CommandKind::Upload => Route::Task(WorkflowCommand::Upload(args)),
        CommandKind::Generate => Route::Task(WorkflowCommand::Generate(args)),
        CommandKind::Publish => Route::Task(WorkflowCommand::Publish(args)),
        CommandKind::Bulk => Route::Task(WorkflowCommand::Bulk(args)),
        CommandKind::Employees => Route::Listing(ListingKind::Employees),
        CommandKind::Departments => Route::Listing(ListingKind::Groups(GroupDimension::Department)),
        CommandKind::Positions => Route::Listing(ListingKind::Groups(GroupDimension::Position)),
        CommandKind::Courses => Route::Listing(ListingKind::Groups(GroupDimension::Course)),
    }
}
