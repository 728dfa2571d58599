//! End-to-end session scenarios.
//!
//! These tests drive `AssistantSession::submit` against the in-memory
//! adapters and verify:
//! 1. Guidance paths make no collaborator calls
//! 2. Hand-off payloads flow from one command to the next
//! 3. Every input settles exactly one assistant reply

use std::sync::Arc;

use course_designer::adapters::mock::{
    DirectoryCall, InMemoryDirectory, InMemoryProfileStore, MockContentApi, MockConversationApi,
    RecordingNotifier, StaticFileSelector,
};
use course_designer::application::{AssistantSession, SessionPorts, SessionSettings};
use course_designer::domain::conversation::{Message, Role};
use course_designer::domain::directory::{GroupDimension, GroupSummary};
use course_designer::domain::employee::{
    EmployeeProfile, EnrollmentRecord, MissingSkill, Skill, SkillAssessment,
};
use course_designer::domain::foundation::{EmployeeId, Percentage, Timestamp, UploadId};
use course_designer::domain::workflow::{HandoffPayload, WorkflowKind, WorkflowPhase};
use course_designer::ports::{ApiError, Severity};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    session: AssistantSession,
    content: MockContentApi,
    chat: MockConversationApi,
    directory: InMemoryDirectory,
    files: StaticFileSelector,
    notifier: RecordingNotifier,
}

impl Harness {
    fn new() -> Self {
        Self::with(
            MockContentApi::new(),
            MockConversationApi::new(),
            InMemoryDirectory::new(),
            StaticFileSelector::empty(),
        )
    }

    fn with(
        content: MockContentApi,
        chat: MockConversationApi,
        directory: InMemoryDirectory,
        files: StaticFileSelector,
    ) -> Self {
        let notifier = RecordingNotifier::new();
        let profiles = Arc::new(profile_store());
        let ports = SessionPorts {
            uploads: Arc::new(content.clone()),
            generation: Arc::new(content.clone()),
            publishing: Arc::new(content.clone()),
            conversation: Arc::new(chat.clone()),
            directory: Arc::new(directory.clone()),
            profiles: profiles.clone(),
            knowledge: profiles,
            files: Arc::new(files.clone()),
            notifier: Arc::new(notifier.clone()),
        };

        Self {
            session: AssistantSession::new(ports, SessionSettings::default()),
            content,
            chat,
            directory,
            files,
            notifier,
        }
    }

    async fn with_jane(mut self) -> Self {
        self.session.load_context(&jane()).await.unwrap();
        self
    }

    /// Submits and returns the settled assistant reply.
    async fn reply(&mut self, input: &str) -> String {
        let appended = self.session.submit(input).await;
        assert_eq!(appended.len(), 2, "expected user message and reply");
        assistant_text(&appended[1])
    }
}

fn jane() -> EmployeeId {
    EmployeeId::new("emp-jane").unwrap()
}

fn profile_store() -> InMemoryProfileStore {
    InMemoryProfileStore::new()
        .with_employee(EmployeeProfile {
            id: jane(),
            name: "Jane Doe".to_string(),
            email: Some("jane@example.com".to_string()),
            department: Some("Analytics".to_string()),
            position: Some("Data Analyst".to_string()),
        })
        .with_assessment(
            &jane(),
            SkillAssessment {
                id: "assessment-1".to_string(),
                assessed_at: Timestamp::now(),
                skills: vec![Skill::named("SQL"), Skill::named("Excel")],
                missing_skills: vec![MissingSkill::named("Python")],
            },
        )
        .with_enrollment(
            &jane(),
            EnrollmentRecord {
                course_id: "c-101".to_string(),
                progress: Percentage::ZERO,
                status: "enrolled".to_string(),
            },
        )
        .with_course("c-101", "Spreadsheet Basics")
}

fn assistant_text(message: &Message) -> String {
    assert_eq!(message.role(), Role::Assistant);
    message
        .content()
        .expect("reply should be settled")
        .to_string()
}

fn upload_ids(ids: &[&str]) -> Vec<UploadId> {
    ids.iter().map(|id| UploadId::new(*id).unwrap()).collect()
}

// =============================================================================
// Upload
// =============================================================================

#[tokio::test]
async fn upload_with_no_files_cancels() {
    let mut h = Harness::new();

    let text = h.reply("/upload").await;

    assert_eq!(text, "File upload canceled.");
    let state = h.session.workflow();
    assert!(!state.is_processing());
    assert_eq!(state.kind(), WorkflowKind::None);
    assert_eq!(state.progress(), Percentage::ZERO);
    assert_eq!(h.content.call_count(), 0);
    assert_eq!(h.files.call_count(), 1);

    let canceled = h
        .session
        .messages()
        .iter()
        .filter(|m| m.content().is_some_and(|c| c.contains("canceled")))
        .count();
    assert_eq!(canceled, 1);
}

#[tokio::test]
async fn uploaded_ids_flow_into_generation() {
    let files = StaticFileSelector::empty()
        .with_text("notes.txt", "SQL joins")
        .with_text("slides.md", "# Window functions");
    let mut h = Harness::with(
        MockContentApi::new(),
        MockConversationApi::new(),
        InMemoryDirectory::new(),
        files,
    )
    .with_jane()
    .await;

    let text = h.reply("/upload notes.txt slides.md").await;
    assert!(text.contains("/generate"));
    match h.session.workflow().payload() {
        Some(HandoffPayload::Uploaded { upload_ids: ids }) => {
            assert_eq!(ids, &upload_ids(&["upload-1", "upload-2"]));
        }
        other => panic!("expected uploaded payload, got {:?}", other),
    }

    h.reply("/generate Advanced SQL").await;

    let request = &h.content.generate_calls()[0];
    assert_eq!(request.upload_ids, upload_ids(&["upload-1", "upload-2"]));
    assert_eq!(request.skills_to_address, vec!["Python"]);
    assert_eq!(request.employee_id, jane());
}

#[tokio::test]
async fn failing_second_file_stops_the_batch() {
    let files = StaticFileSelector::empty()
        .with_text("a.txt", "a")
        .with_text("b.txt", "b")
        .with_text("c.txt", "c");
    let content = MockContentApi::new()
        .with_upload_id("u-1")
        .with_upload_result(Err(ApiError::status(413, Some("File too large".into()))));
    let mut h = Harness::with(
        content,
        MockConversationApi::new(),
        InMemoryDirectory::new(),
        files,
    );

    let text = h.reply("/upload a.txt b.txt c.txt").await;

    assert_eq!(h.content.upload_calls().len(), 2);
    assert_eq!(text, "Failed to upload b.txt: File too large");
    let state = h.session.workflow();
    assert_eq!(state.phase(), WorkflowPhase::Failed);
    assert!(!state.is_processing());
    assert_eq!(state.progress(), Percentage::ZERO);
    assert_eq!(h.notifier.count(Severity::Error), 1);
    assert_eq!(h.session.messages().pending_count(), 0);
}

// =============================================================================
// Generate and publish
// =============================================================================

#[tokio::test]
async fn generate_without_title_asks_for_one() {
    let mut h = Harness::new().with_jane().await;

    let text = h.reply("/generate").await;

    assert!(text.starts_with("Please provide a title for the course you want to generate"));
    assert_eq!(h.content.call_count(), 0);
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn generate_names_the_publish_command() {
    let content = MockContentApi::new().with_generation_result(Ok(MockContentApi::generated(
        "gen-42",
        "Advanced SQL",
        &["Joins", "Window functions"],
    )));
    let mut h = Harness::with(
        content,
        MockConversationApi::new(),
        InMemoryDirectory::new(),
        StaticFileSelector::empty(),
    )
    .with_jane()
    .await;

    let text = h.reply("/generate Advanced SQL").await;

    assert!(text.contains("/publish gen-42"));
    assert!(text.contains("Window functions"));
    match h.session.workflow().payload() {
        Some(HandoffPayload::Generated { content_id, .. }) => {
            assert_eq!(content_id.as_str(), "gen-42");
        }
        other => panic!("expected generated payload, got {:?}", other),
    }
}

#[tokio::test]
async fn publish_without_context_makes_no_call() {
    let mut h = Harness::new();

    let text = h.reply("/publish abc123").await;

    assert_eq!(text, "Please select an employee first before publishing a course.");
    assert_eq!(h.content.call_count(), 0);
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn publish_after_generate_reports_enrollments() {
    let mut h = Harness::new().with_jane().await;

    h.reply("/generate SQL Basics").await;
    let text = h.reply("/publish content-1").await;

    assert!(text.contains("Enrollments created: 1"));
    let request = &h.content.publish_calls()[0];
    assert_eq!(request.content_id.as_str(), "content-1");
    assert_eq!(request.employee_ids, vec![jane()]);
    assert!(matches!(
        h.session.workflow().payload(),
        Some(HandoffPayload::Published { enrollment_count: 1, .. })
    ));
    assert_eq!(h.notifier.count(Severity::Success), 2);
}

#[tokio::test]
async fn publish_without_content_id_after_generate_is_guidance() {
    let mut h = Harness::new().with_jane().await;

    h.reply("/generate SQL Basics").await;
    let calls_after_generate = h.content.call_count();
    let text = h.reply("/publish").await;

    assert_eq!(
        text,
        "Please provide the content ID of the course to publish. Example: /publish <contentId>"
    );
    assert_eq!(h.content.call_count(), calls_after_generate);
    assert!(h.content.publish_calls().is_empty());
    assert!(matches!(
        h.session.workflow().payload(),
        Some(HandoffPayload::Generated { .. })
    ));
    assert_eq!(h.notifier.count(Severity::Error), 0);
}

#[tokio::test]
async fn rejected_guidance_keeps_previous_payload() {
    let files = StaticFileSelector::empty().with_text("notes.txt", "x");
    let mut h = Harness::with(
        MockContentApi::new(),
        MockConversationApi::new(),
        InMemoryDirectory::new(),
        files,
    );

    h.reply("/upload notes.txt").await;
    h.reply("/generate").await;

    assert!(matches!(
        h.session.workflow().payload(),
        Some(HandoffPayload::Uploaded { .. })
    ));
}

// =============================================================================
// Bulk and listings
// =============================================================================

#[tokio::test]
async fn bulk_offers_groups_for_selection() {
    let directory = InMemoryDirectory::new()
        .with_group(GroupDimension::Department, GroupSummary::new("d1", "Sales", 12));
    let mut h = Harness::with(
        MockContentApi::new(),
        MockConversationApi::new(),
        directory,
        StaticFileSelector::empty(),
    );

    let text = h.reply("/bulk by:department").await;

    assert!(text.contains("1. Sales (12 members)"));
    assert_eq!(h.session.workflow().phase(), WorkflowPhase::Completed);
    assert!(matches!(
        h.session.workflow().payload(),
        Some(HandoffPayload::GroupSelection { selected_group: None, .. })
    ));
}

#[tokio::test]
async fn bulk_without_dimension_is_guidance() {
    let mut h = Harness::new();

    let text = h.reply("/bulk team").await;

    assert!(text.starts_with("Please choose how to group employees"));
    assert_eq!(h.directory.call_count(), 0);
}

#[tokio::test]
async fn bulk_fetch_error_resets_workflow() {
    let directory = InMemoryDirectory::new().failing_with(ApiError::network("refused"));
    let mut h = Harness::with(
        MockContentApi::new(),
        MockConversationApi::new(),
        directory,
        StaticFileSelector::empty(),
    );

    let text = h.reply("/bulk by:position").await;

    assert!(text.starts_with("Failed to load positions"));
    let state = h.session.workflow();
    assert_eq!(state.phase(), WorkflowPhase::Idle);
    assert!(!state.is_processing());
    assert_eq!(h.notifier.count(Severity::Error), 1);
}

#[tokio::test]
async fn listings_fetch_fresh_each_time() {
    let directory = InMemoryDirectory::new().with_employee("emp-1", "Jane Doe", Some("Analytics"));
    let mut h = Harness::with(
        MockContentApi::new(),
        MockConversationApi::new(),
        directory,
        StaticFileSelector::empty(),
    );

    let first = h.reply("/employees").await;
    let second = h.reply("/employees").await;

    assert_eq!(first, second);
    assert_eq!(
        h.directory.get_calls(),
        vec![DirectoryCall::Employees, DirectoryCall::Employees]
    );
    assert_eq!(h.session.workflow().kind(), WorkflowKind::None);
}

// =============================================================================
// Conversation
// =============================================================================

#[tokio::test]
async fn question_carries_employee_context() {
    let chat = MockConversationApi::new().with_response("Jane knows SQL and Excel.");
    let mut h = Harness::with(
        MockContentApi::new(),
        chat,
        InMemoryDirectory::new(),
        StaticFileSelector::empty(),
    )
    .with_jane()
    .await;

    let text = h.reply("What skills does Jane have?").await;

    assert_eq!(text, "Jane knows SQL and Excel.");
    let request = h.chat.last_call().unwrap();
    let projection = request.employee_context.unwrap();
    assert_eq!(projection.skills, vec!["SQL", "Excel"]);
    assert_eq!(projection.missing_skills, vec!["Python"]);
    assert_eq!(
        request.messages.last().map(|m| m.content.as_str()),
        Some("What skills does Jane have?")
    );
    assert_eq!(h.session.messages().pending_count(), 0);
}

#[tokio::test]
async fn failed_question_resolves_placeholder_once() {
    let chat = MockConversationApi::new().with_error(ApiError::network("connection refused"));
    let mut h = Harness::with(
        MockContentApi::new(),
        chat,
        InMemoryDirectory::new(),
        StaticFileSelector::empty(),
    );

    let text = h.reply("What skills does Jane have?").await;

    assert!(text.starts_with("I couldn't reach the assistant service"));
    assert_eq!(h.session.messages().len(), 2);
    assert_eq!(h.session.messages().pending_count(), 0);
}

#[tokio::test]
async fn unknown_command_goes_to_the_assistant() {
    let mut h = Harness::new();

    h.reply("/help me").await;

    assert_eq!(h.chat.call_count(), 1);
    assert_eq!(h.content.call_count(), 0);
    assert_eq!(
        h.chat.last_call().unwrap().messages[0].content,
        "/help me"
    );
}

#[tokio::test]
async fn history_window_caps_sent_messages() {
    let mut h = Harness::new();

    for i in 0..6 {
        h.reply(&format!("question {}", i)).await;
    }

    let sent = h.chat.last_call().unwrap().messages;
    assert_eq!(sent.len(), 5);
    assert_eq!(sent.last().unwrap().content, "question 5");
}

// =============================================================================
// Observation and context
// =============================================================================

#[tokio::test]
async fn watchers_see_the_settled_state() {
    let mut h = Harness::new().with_jane().await;
    let mut rx = h.session.subscribe_workflow();

    h.reply("/generate SQL Basics").await;

    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.phase(), WorkflowPhase::Completed);
    assert_eq!(state.progress(), Percentage::HUNDRED);
}

#[tokio::test]
async fn refresh_reloads_the_same_employee() {
    let mut h = Harness::new().with_jane().await;

    assert!(h.session.refresh_context().await.unwrap());

    let context = h.session.employee_context().unwrap();
    assert_eq!(context.employee_id(), &jane());
    assert_eq!(context.courses()[0].title, "Spreadsheet Basics");
}
