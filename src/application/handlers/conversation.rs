//! ConversationHandler - the free-text path to the assistant backend.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::conversation::MessageLog;
use crate::domain::employee::EmployeeContext;
use crate::ports::{ApiError, ChatTurn, ConversationApi, ConversationRequest};

pub struct ConversationHandler {
    api: Arc<dyn ConversationApi>,
    history_window: usize,
}

impl ConversationHandler {
    pub fn new(api: Arc<dyn ConversationApi>, history_window: usize) -> Self {
        Self {
            api,
            history_window: history_window.max(1),
        }
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    /// Sends the last settled messages plus the employee context.
    ///
    /// Loading placeholders in the log are skipped.
    #[instrument(skip_all, fields(window = self.history_window, with_context = context.is_some()))]
    pub async fn handle(
        &self,
        log: &MessageLog,
        context: Option<&EmployeeContext>,
    ) -> Result<String, ApiError> {
        let messages: Vec<ChatTurn> = log
            .recent_final(self.history_window)
            .into_iter()
            .filter_map(ChatTurn::from_message)
            .collect();

        let request = ConversationRequest {
            messages,
            employee_context: context.map(EmployeeContext::projection),
        };

        let answer = self.api.respond(request).await;
        if let Err(err) = &answer {
            tracing::warn!(error = %err, "assistant call failed");
        }
        answer
    }
}

/// Message shown in place of an answer, one per failure category.
pub fn fallback_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::Timeout { .. } => {
            "I couldn't reach the assistant service. Please check your connection and try again."
                .to_string()
        }
        ApiError::Status { status, .. } => format!(
            "The assistant service returned an error (status {}). Please try again later.",
            status
        ),
        ApiError::InvalidBody(_) => {
            "The assistant service sent a reply I couldn't read. Please try again.".to_string()
        }
        ApiError::UnexpectedShape(_) => {
            "The assistant service replied without an answer. Please try again.".to_string()
        }
        ApiError::Rejected { message } => match message {
            Some(text) => format!("The assistant service declined the request: {}", text),
            None => "The assistant service declined the request.".to_string(),
        },
    }
}
