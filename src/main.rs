//! Course designer assistant - line-oriented front end.
//!
//! Reads commands and questions from stdin, prints assistant replies to
//! stdout and workflow progress to stderr.

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use course_designer::adapters::{
    BackendClient, BackendClientConfig, ContentPaths, HrRestStore, HttpContentApi,
    HttpConversationApi, HttpKnowledgeSource, PathFileSelector, SimulatedKnowledgeSource,
    TracingNotifier,
};
use course_designer::application::{AssistantSession, SessionPorts};
use course_designer::config::{AppConfig, LoggingConfig};
use course_designer::domain::command::CommandKind;
use course_designer::domain::conversation::Role;
use course_designer::domain::foundation::EmployeeId;
use course_designer::ports::KnowledgeSource;

#[derive(Parser, Debug)]
#[command(name = "course-designer")]
#[command(about = "Conversational assistant for designing and assigning training courses", long_about = None)]
struct Cli {
    /// Employee whose context is loaded at startup, overrides the configured one
    #[arg(long, value_name = "ID")]
    employee: Option<String>,

    /// Start without loading any employee context
    #[arg(long)]
    no_context: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let mut session = AssistantSession::new(
        build_ports(&config)?,
        config.assistant.session_settings(),
    );

    let employee = cli.employee.or_else(|| config.assistant.employee_id.clone());
    match employee {
        Some(raw) if !cli.no_context => {
            let employee_id = EmployeeId::new(raw)?;
            println!("{}", load_employee(&mut session, &employee_id).await);
        }
        _ => tracing::info!("starting without employee context"),
    }

    let mut progress = session.subscribe_workflow();
    tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let state = progress.borrow_and_update().clone();
            if state.is_processing() {
                eprintln!("[{} {}] {}", state.kind().as_str(), state.progress(), state.status());
            }
        }
    });

    print_banner();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if let Some(meta) = parse_meta(&line) {
            println!("{}\n", run_meta(&mut session, meta).await);
            continue;
        }
        for message in session.submit(&line).await {
            if message.role() == Role::Assistant {
                println!("{}\n", message.content().unwrap_or_default());
            }
        }
    }

    Ok(())
}

/// Session controls handled by this front end, outside the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MetaCommand {
    /// `:refresh` reloads the current employee's context.
    Refresh,
    /// `:employee <id>` loads the context of another employee.
    Employee(String),
    /// `:clear` drops the employee context.
    Clear,
}

fn parse_meta(line: &str) -> Option<MetaCommand> {
    let rest = line.trim().strip_prefix(':')?;
    let (word, arg) = match rest.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (rest, ""),
    };

    match word.to_lowercase().as_str() {
        "refresh" => Some(MetaCommand::Refresh),
        "employee" => Some(MetaCommand::Employee(arg.to_string())),
        "clear" => Some(MetaCommand::Clear),
        _ => None,
    }
}

async fn run_meta(session: &mut AssistantSession, meta: MetaCommand) -> String {
    match meta {
        MetaCommand::Refresh => match session.refresh_context().await {
            Ok(true) => match session.employee_context() {
                Some(context) => format!("Reloaded context for {}.", context.employee().name),
                None => "Employee context reloaded.".to_string(),
            },
            Ok(false) => "No employee selected. Use :employee <id> first.".to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "context refresh failed");
                format!("Could not refresh employee context: {}", err)
            }
        },
        MetaCommand::Employee(raw) => match EmployeeId::new(raw) {
            Ok(employee_id) => load_employee(session, &employee_id).await,
            Err(_) => "Usage: :employee <id>".to_string(),
        },
        MetaCommand::Clear => {
            session.clear_context();
            "Employee context cleared.".to_string()
        }
    }
}

async fn load_employee(session: &mut AssistantSession, employee_id: &EmployeeId) -> String {
    match session.load_context(employee_id).await {
        Ok(()) => match session.employee_context() {
            Some(context) => format!("Working with {}.", context.employee().name),
            None => "Employee context loaded.".to_string(),
        },
        Err(err) => {
            tracing::warn!(employee = %employee_id, error = %err, "context not loaded");
            format!("Could not load employee context: {}", err)
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_ports(config: &AppConfig) -> Result<SessionPorts, Box<dyn std::error::Error>> {
    let backend = &config.backend;

    let mut client_config =
        BackendClientConfig::new(&backend.base_url).with_timeout(backend.timeout());
    if let Some(key) = &backend.api_key {
        client_config = client_config.with_api_key(key.clone());
    }
    let client = BackendClient::new(client_config)?;

    let content = Arc::new(HttpContentApi::new(
        client.clone(),
        ContentPaths {
            upload: backend.upload_path.clone(),
            generate: backend.generate_path.clone(),
            publish: backend.publish_path.clone(),
        },
    ));
    let store = Arc::new(HrRestStore::new(client.clone(), &backend.rest_path));
    let knowledge: Arc<dyn KnowledgeSource> = if config.assistant.simulate_knowledge {
        Arc::new(SimulatedKnowledgeSource::new())
    } else {
        Arc::new(HttpKnowledgeSource::new(client.clone(), &backend.knowledge_path))
    };

    Ok(SessionPorts {
        uploads: content.clone(),
        generation: content.clone(),
        publishing: content,
        conversation: Arc::new(HttpConversationApi::new(client, &backend.chat_path)),
        directory: store.clone(),
        profiles: store,
        knowledge,
        files: Arc::new(PathFileSelector::new(&config.assistant.upload_dir)),
        notifier: Arc::new(TracingNotifier::new()),
    })
}

fn print_banner() {
    let commands: Vec<String> = CommandKind::all().map(|k| k.token().to_string()).collect();
    println!("Course designer assistant. Commands: {}", commands.join(" "));
    println!("Session: :employee <id>, :refresh, :clear");
    println!("Anything else is sent to the assistant as a question.\n");
}
