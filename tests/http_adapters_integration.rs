//! Integration tests for the HTTP adapters against a mock backend.
//!
//! These tests verify:
//! 1. Failure categories map to distinct `ApiError` variants
//! 2. Request bodies and headers match the backend contract
//! 3. REST rows decode into domain records

use std::sync::Arc;
use std::time::Duration;

use mockito::{Matcher, Server};
use secrecy::Secret;
use serde_json::json;

use course_designer::adapters::{
    BackendClient, BackendClientConfig, ContentPaths, HrRestStore, HttpContentApi,
    HttpConversationApi, HttpKnowledgeSource, SimulatedKnowledgeSource,
};
use course_designer::application::EmployeeContextLoader;
use course_designer::domain::conversation::Role;
use course_designer::domain::directory::GroupDimension;
use course_designer::domain::foundation::{ContentId, EmployeeId, UploadId};
use course_designer::ports::{
    ApiError, ChatTurn, ConversationApi, ConversationRequest, Directory, GenerationApi,
    GenerationRequest, KnowledgeSource, ProfileReader, PublishApi, PublishRequest, UploadApi,
    UploadRequest,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn client(base_url: &str) -> BackendClient {
    BackendClient::new(
        BackendClientConfig::new(base_url)
            .with_api_key(Secret::new("anon-key".to_string()))
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

fn question(text: &str) -> ConversationRequest {
    ConversationRequest {
        messages: vec![ChatTurn {
            role: Role::User,
            content: text.to_string(),
        }],
        employee_context: None,
    }
}

fn upload_request() -> UploadRequest {
    UploadRequest {
        file_base64: "aGVsbG8=".to_string(),
        file_name: "notes.txt".to_string(),
        file_type: "text/plain".to_string(),
    }
}

fn jane() -> EmployeeId {
    EmployeeId::new("emp-jane").unwrap()
}

// =============================================================================
// Failure mapping
// =============================================================================

#[tokio::test]
async fn connection_failure_is_network_error() {
    let api = HttpConversationApi::new(client("http://127.0.0.1:1"), "/chat");

    let err = api.respond(question("hi")).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    assert!(err.is_transport());
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat")
        .with_status(502)
        .with_body(r#"{"error":"upstream unavailable"}"#)
        .create_async()
        .await;
    let api = HttpConversationApi::new(client(&server.url()), "/chat");

    let err = api.respond(question("hi")).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        err,
        ApiError::status(502, Some("upstream unavailable".to_string()))
    );
}

#[tokio::test]
async fn non_json_body_is_invalid_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;
    let api = HttpConversationApi::new(client(&server.url()), "/chat");

    let err = api.respond(question("hi")).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidBody(_)), "got {:?}", err);
}

#[tokio::test]
async fn missing_response_field_is_unexpected_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body(r#"{"answer":"wrong key"}"#)
        .create_async()
        .await;
    let api = HttpConversationApi::new(client(&server.url()), "/chat");

    let err = api.respond(question("hi")).await.unwrap_err();

    assert_eq!(err, ApiError::missing_field("response"));
}

#[tokio::test]
async fn success_false_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(200)
        .with_body(r#"{"success":false,"error":"Unsupported file type"}"#)
        .create_async()
        .await;
    let api = HttpContentApi::new(
        client(&server.url()),
        ContentPaths {
            upload: "/upload".to_string(),
            ..Default::default()
        },
    );

    let err = api.upload(upload_request()).await.unwrap_err();

    assert_eq!(err.server_message(), Some("Unsupported file type"));
}

// =============================================================================
// Content collaborators
// =============================================================================

#[tokio::test]
async fn upload_sends_encoded_file_with_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/hr/courses/upload")
        .match_header("apikey", "anon-key")
        .match_header("authorization", "Bearer anon-key")
        .match_body(Matcher::PartialJson(json!({
            "fileBase64": "aGVsbG8=",
            "fileName": "notes.txt",
            "fileType": "text/plain"
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"uploadId":"up-7"}"#)
        .create_async()
        .await;
    let api = HttpContentApi::new(client(&server.url()), ContentPaths::default());

    let id = api.upload(upload_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(id, UploadId::new("up-7").unwrap());
}

#[tokio::test]
async fn generate_reads_content_and_structure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/hr/courses/generate")
        .match_body(Matcher::PartialJson(json!({
            "employeeId": "emp-jane",
            "title": "Advanced SQL",
            "difficultyLevel": "intermediate"
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "contentId": "gen-42",
                "title": "Advanced SQL",
                "courseStructure": {"modules": [
                    {"title": "Joins", "sectionCount": 3},
                    {"title": "Window functions", "sectionCount": 2}
                ]}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let api = HttpContentApi::new(client(&server.url()), ContentPaths::default());

    let generated = api
        .generate(GenerationRequest {
            employee_id: jane(),
            title: "Advanced SQL".to_string(),
            description: "A course on advanced SQL".to_string(),
            skills_to_address: vec!["Window functions".to_string()],
            difficulty_level: "intermediate".to_string(),
            upload_ids: vec![],
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(generated.content_id.as_str(), "gen-42");
    assert_eq!(generated.course_structure.module_count(), 2);
}

#[tokio::test]
async fn publish_counts_enrollments() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/hr/courses/publish")
        .match_body(Matcher::PartialJson(json!({
            "contentId": "gen-42",
            "sendNotification": true
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"courseId":"course-9","enrollmentIds":["e-1"]}"#)
        .create_async()
        .await;
    let api = HttpContentApi::new(client(&server.url()), ContentPaths::default());

    let published = api
        .publish(PublishRequest {
            content_id: ContentId::new("gen-42").unwrap(),
            employee_ids: vec![jane()],
            send_notification: true,
            assignment_message: "A new course has been assigned to you.".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(published.course_id.as_str(), "course-9");
    assert_eq!(published.enrollment_count, 1);
}

#[tokio::test]
async fn conversation_returns_answer() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat")
        .match_body(Matcher::PartialJson(json!({"employeeContext": null})))
        .with_status(200)
        .with_body(r#"{"response":"Hello there"}"#)
        .create_async()
        .await;
    let api = HttpConversationApi::new(client(&server.url()), "/chat");

    let answer = api.respond(question("hi")).await.unwrap();

    assert_eq!(answer, "Hello there");
}

// =============================================================================
// REST store
// =============================================================================

#[tokio::test]
async fn groups_read_member_counts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/hr_positions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "select".into(),
                "id,name:title,members:hr_employees(count)".into(),
            ),
            Matcher::UrlEncoded("order".into(), "title.asc".into()),
        ]))
        .with_status(200)
        .with_body(
            json!([
                {"id": "p1", "name": "Analyst", "members": [{"count": 3}]},
                {"id": "p2", "name": "Engineer", "members": []}
            ])
            .to_string(),
        )
        .create_async()
        .await;
    let store = HrRestStore::new(client(&server.url()), "/rest/v1");

    let groups = store.list_groups(GroupDimension::Position).await.unwrap();

    mock.assert_async().await;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Analyst");
    assert_eq!(groups[0].member_count, 3);
    assert_eq!(groups[1].member_count, 0);
}

#[tokio::test]
async fn unknown_employee_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/v1/hr_employees")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.emp-ghost".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let store = HrRestStore::new(client(&server.url()), "/rest/v1");

    let employee = store
        .employee(&EmployeeId::new("emp-ghost").unwrap())
        .await
        .unwrap();

    assert!(employee.is_none());
}

#[tokio::test]
async fn context_loads_over_rest() {
    let mut server = Server::new_async().await;
    let by_jane = || Matcher::UrlEncoded("employee_id".into(), "eq.emp-jane".into());

    server
        .mock("GET", "/rest/v1/hr_employees")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.emp-jane".into()))
        .with_status(200)
        .with_body(
            json!([{
                "id": "emp-jane",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "department": {"name": "Analytics"},
                "position": {"title": "Data Analyst"}
            }])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/hr_employee_skills_assessments")
        .match_query(by_jane())
        .with_status(200)
        .with_body(
            json!([
                {
                    "id": "old",
                    "assessed_at": "2024-01-01T00:00:00Z",
                    "skills": [{"name": "Excel"}],
                    "missing_skills": [{"name": "SQL"}]
                },
                {
                    "id": "new",
                    "assessed_at": "2024-06-01T00:00:00Z",
                    "skills": [{"name": "SQL", "proficiency": 72.4}],
                    "missing_skills": [{"name": "Python", "importance": "high"}]
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/hr_course_enrollments")
        .match_query(by_jane())
        .with_status(200)
        .with_body(r#"[{"course_id":"c-12345678-abcd","progress":40,"status":"in_progress"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/hr_courses")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"message":"boom"}"#)
        .create_async()
        .await;

    let store = Arc::new(HrRestStore::new(client(&server.url()), "/rest/v1"));
    let loader = EmployeeContextLoader::new(store, Arc::new(SimulatedKnowledgeSource::new()));

    let context = loader.load(&jane()).await.unwrap();

    assert_eq!(context.employee().position.as_deref(), Some("Data Analyst"));
    assert_eq!(context.skill_names(), vec!["SQL"]);
    assert_eq!(context.missing_skill_names(), vec!["Python"]);
    assert_eq!(context.courses().len(), 1);
    assert_eq!(context.courses()[0].title, "Course c-123456");
    assert!(!context.knowledge_base().is_empty());
}

#[tokio::test]
async fn knowledge_snapshot_defaults_missing_lists() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/knowledge")
        .match_body(Matcher::PartialJson(json!({"employeeId": "emp-jane"})))
        .with_status(200)
        .with_body(r#"{"knowledgeGaps":[]}"#)
        .create_async()
        .await;
    let source = HttpKnowledgeSource::new(client(&server.url()), "/knowledge");

    let snapshot = source.snapshot(&jane()).await.unwrap();

    mock.assert_async().await;
    assert!(snapshot.knowledge_base.is_empty());
    assert!(snapshot.resources.is_empty());
}
