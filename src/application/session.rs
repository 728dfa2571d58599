//! AssistantSession - the single entry point of the assistant.
//!
//! A session owns one message log, one workflow tracker and the optional
//! employee context. `submit` takes `&mut self`, so commands run one at a
//! time; share a session across tasks behind a `tokio::sync::Mutex`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::instrument;

use super::context_loader::EmployeeContextLoader;
use super::error::{ContextError, WorkflowError};
use super::handlers::{
    fallback_message, BulkCommand, BulkHandler, ConversationHandler, GenerateCommand,
    GenerateHandler, GenerateSettings, ListingHandler, PublishCommand, PublishHandler,
    TaskOutcome, UploadCommand, UploadHandler,
};
use super::progress::ProgressTracker;
use super::router::{CommandRouter, Route, WorkflowCommand};
use crate::domain::command::parse_input;
use crate::domain::conversation::{Message, MessageLog, Role};
use crate::domain::employee::EmployeeContext;
use crate::domain::foundation::{EmployeeId, MessageId};
use crate::domain::workflow::{WorkflowKind, WorkflowState};
use crate::ports::{
    ConversationApi, Directory, FileSelector, GenerationApi, KnowledgeSource, Notification,
    Notifier, ProfileReader, PublishApi, UploadApi,
};

/// Collaborators a session talks to.
#[derive(Clone)]
pub struct SessionPorts {
    pub uploads: Arc<dyn UploadApi>,
    pub generation: Arc<dyn GenerationApi>,
    pub publishing: Arc<dyn PublishApi>,
    pub conversation: Arc<dyn ConversationApi>,
    pub directory: Arc<dyn Directory>,
    pub profiles: Arc<dyn ProfileReader>,
    pub knowledge: Arc<dyn KnowledgeSource>,
    pub files: Arc<dyn FileSelector>,
    pub notifier: Arc<dyn Notifier>,
}

/// Tunables taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub history_window: usize,
    pub difficulty_level: String,
    pub assignment_message: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            history_window: 5,
            difficulty_level: GenerateSettings::default().difficulty_level,
            assignment_message: "A new course has been assigned to you.".to_string(),
        }
    }
}

pub struct AssistantSession {
    log: MessageLog,
    tracker: ProgressTracker,
    context: Option<Arc<EmployeeContext>>,
    router: CommandRouter,
    context_loader: EmployeeContextLoader,
    upload: UploadHandler,
    generate: GenerateHandler,
    publish: PublishHandler,
    bulk: BulkHandler,
    listing: ListingHandler,
    conversation: ConversationHandler,
    notifier: Arc<dyn Notifier>,
}

impl AssistantSession {
    pub fn new(ports: SessionPorts, settings: SessionSettings) -> Self {
        Self {
            log: MessageLog::new(),
            tracker: ProgressTracker::new(),
            context: None,
            router: CommandRouter::new(),
            context_loader: EmployeeContextLoader::new(ports.profiles, ports.knowledge),
            upload: UploadHandler::new(ports.uploads, ports.files),
            generate: GenerateHandler::new(
                ports.generation,
                GenerateSettings {
                    difficulty_level: settings.difficulty_level,
                },
            ),
            publish: PublishHandler::new(ports.publishing, settings.assignment_message),
            bulk: BulkHandler::new(ports.directory.clone()),
            listing: ListingHandler::new(ports.directory),
            conversation: ConversationHandler::new(ports.conversation, settings.history_window),
            notifier: ports.notifier,
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn workflow(&self) -> &WorkflowState {
        self.tracker.state()
    }

    pub fn employee_context(&self) -> Option<&EmployeeContext> {
        self.context.as_deref()
    }

    /// Receiver that always holds the latest workflow state.
    pub fn subscribe_workflow(&self) -> watch::Receiver<WorkflowState> {
        self.tracker.subscribe()
    }

    /// Loads the context for an employee, replacing any previous one.
    ///
    /// On failure the previous context stays in place.
    pub async fn load_context(&mut self, employee_id: &EmployeeId) -> Result<(), ContextError> {
        let context = self.context_loader.load(employee_id).await?;
        self.context = Some(Arc::new(context));
        Ok(())
    }

    /// Reloads the current employee's context. Returns false when no
    /// employee is selected.
    pub async fn refresh_context(&mut self) -> Result<bool, ContextError> {
        let Some(employee_id) = self.context.as_ref().map(|c| c.employee_id().clone()) else {
            tracing::debug!("no employee selected, nothing to refresh");
            return Ok(false);
        };
        self.load_context(&employee_id).await?;
        Ok(true)
    }

    pub fn clear_context(&mut self) {
        self.context = None;
    }

    /// Handles one line of user input and returns the messages it appended.
    ///
    /// Every non-blank input appends the user message and one assistant
    /// reply. The reply starts as a loading placeholder and is settled
    /// exactly once, whatever the outcome.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, input: &str) -> Vec<Message> {
        let parsed = parse_input(input);
        let route = self.router.route(&parsed);
        if route == Route::Ignore {
            return Vec::new();
        }

        let offset = self.log.len();
        self.log.push(Message::user(input.trim()));
        let placeholder = self.log.push_pending(Role::Assistant);

        let reply = match route {
            Route::Listing(kind) => self.listing.handle(kind).await,
            Route::Task(command) => self.run_task(command).await,
            Route::Conversation(_) => {
                match self
                    .conversation
                    .handle(&self.log, self.context.as_deref())
                    .await
                {
                    Ok(answer) => answer,
                    Err(err) => fallback_message(&err),
                }
            }
            Route::Ignore => String::new(),
        };

        self.settle(placeholder, reply);
        self.log.since(offset).to_vec()
    }

    async fn run_task(&mut self, command: WorkflowCommand) -> String {
        let kind = command.kind();
        let context = self.context.as_deref();
        let result = match command {
            WorkflowCommand::Upload(args) => {
                self.upload
                    .handle(UploadCommand { args }, &mut self.tracker)
                    .await
            }
            WorkflowCommand::Generate(args) => {
                self.generate
                    .handle(
                        GenerateCommand {
                            title: &args,
                            context,
                        },
                        &mut self.tracker,
                    )
                    .await
            }
            WorkflowCommand::Publish(args) => {
                self.publish
                    .handle(
                        PublishCommand {
                            content_id: &args,
                            context,
                        },
                        &mut self.tracker,
                    )
                    .await
            }
            WorkflowCommand::Bulk(args) => {
                self.bulk
                    .handle(BulkCommand { args }, &mut self.tracker)
                    .await
            }
        };

        self.finish(kind, result)
    }

    /// Applies a handler result to the tracker and returns the reply text.
    fn finish(&mut self, kind: WorkflowKind, result: Result<TaskOutcome, WorkflowError>) -> String {
        match result {
            Ok(TaskOutcome::Completed {
                reply,
                status,
                payload,
                notification,
            }) => {
                self.tracker.complete(payload, status);
                if let Some(notification) = notification {
                    self.notifier.notify(notification);
                }
                reply
            }
            Ok(TaskOutcome::Abandoned { reply }) => {
                self.tracker.reset();
                reply
            }
            Err(err) if err.is_guidance() => {
                if self.tracker.is_processing() {
                    self.tracker.reset();
                }
                err.user_message()
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(workflow = kind.as_str(), error = %err, "workflow failed");

                // Group listing failures leave no failed run behind.
                if kind == WorkflowKind::Bulk {
                    self.tracker.reset();
                } else {
                    self.tracker.fail(message.clone());
                }
                self.notifier
                    .notify(Notification::error(failure_title(kind), message.clone()));
                message
            }
        }
    }

    fn settle(&mut self, placeholder: MessageId, reply: String) {
        if let Err(err) = self.log.resolve(placeholder, reply) {
            tracing::error!(error = %err, "reply placeholder already settled");
        }
    }
}

fn failure_title(kind: WorkflowKind) -> &'static str {
    match kind {
        WorkflowKind::Upload => "Upload failed",
        WorkflowKind::Generate => "Course generation failed",
        WorkflowKind::Publish => "Publishing failed",
        WorkflowKind::Bulk => "Loading groups failed",
        WorkflowKind::None => "Request failed",
    }
}
