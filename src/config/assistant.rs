//! Assistant behavior configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::SessionSettings;

/// Upper bound for the conversation history window.
pub const MAX_HISTORY_WINDOW: usize = 50;

/// Settings for the assistant session.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Employee whose context is loaded at startup
    pub employee_id: Option<String>,

    /// Settled messages sent with each free-text question
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Difficulty requested for generated courses
    #[serde(default = "default_difficulty")]
    pub difficulty_level: String,

    /// Message sent to employees when a course is assigned
    #[serde(default = "default_assignment_message")]
    pub assignment_message: String,

    /// Use the built-in knowledge snapshot instead of the backend
    #[serde(default = "default_simulate_knowledge")]
    pub simulate_knowledge: bool,

    /// Directory `/upload` paths are resolved against
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

impl AssistantConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_window == 0 || self.history_window > MAX_HISTORY_WINDOW {
            return Err(ValidationError::InvalidHistoryWindow {
                max: MAX_HISTORY_WINDOW,
            });
        }
        if self.difficulty_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ASSISTANT__DIFFICULTY_LEVEL"));
        }
        Ok(())
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            history_window: self.history_window,
            difficulty_level: self.difficulty_level.clone(),
            assignment_message: self.assignment_message.clone(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            employee_id: None,
            history_window: default_history_window(),
            difficulty_level: default_difficulty(),
            assignment_message: default_assignment_message(),
            simulate_knowledge: default_simulate_knowledge(),
            upload_dir: default_upload_dir(),
        }
    }
}

fn default_history_window() -> usize {
    5
}

fn default_difficulty() -> String {
    "intermediate".to_string()
}

fn default_assignment_message() -> String {
    "A new course has been assigned to you.".to_string()
}

fn default_simulate_knowledge() -> bool {
    true
}

fn default_upload_dir() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.history_window, 5);
        assert_eq!(config.difficulty_level, "intermediate");
        assert!(config.simulate_knowledge);
        assert!(config.employee_id.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_history_window_bounds() {
        for window in [0, MAX_HISTORY_WINDOW + 1] {
            let config = AssistantConfig {
                history_window: window,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidHistoryWindow { max: 50 })
            );
        }
    }

    #[test]
    fn test_session_settings_follow_config() {
        let config = AssistantConfig {
            history_window: 8,
            difficulty_level: "advanced".to_string(),
            ..Default::default()
        };
        let settings = config.session_settings();
        assert_eq!(settings.history_window, 8);
        assert_eq!(settings.difficulty_level, "advanced");
        assert_eq!(settings.assignment_message, config.assignment_message);
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{ "employee_id": "emp-1", "simulate_knowledge": false }"#;
        let config: AssistantConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.employee_id.as_deref(), Some("emp-1"));
        assert!(!config.simulate_knowledge);
        assert_eq!(config.history_window, 5);
    }
}
