//! Backend service configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the HR backend lives and how to reach each endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://project.example.com`
    #[serde(default)]
    pub base_url: String,

    /// Key sent as `apikey` and bearer token
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    #[serde(default = "default_generate_path")]
    pub generate_path: String,

    #[serde(default = "default_publish_path")]
    pub publish_path: String,

    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Prefix of the row-level REST interface
    #[serde(default = "default_rest_path")]
    pub rest_path: String,

    #[serde(default = "default_knowledge_path")]
    pub knowledge_path: String,
}

impl BackendConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        let paths = [
            ("upload_path", &self.upload_path),
            ("generate_path", &self.generate_path),
            ("publish_path", &self.publish_path),
            ("chat_path", &self.chat_path),
            ("rest_path", &self.rest_path),
            ("knowledge_path", &self.knowledge_path),
        ];
        for (name, path) in paths {
            if !path.starts_with('/') {
                return Err(ValidationError::InvalidPath(name));
            }
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_secs: default_timeout(),
            upload_path: default_upload_path(),
            generate_path: default_generate_path(),
            publish_path: default_publish_path(),
            chat_path: default_chat_path(),
            rest_path: default_rest_path(),
            knowledge_path: default_knowledge_path(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_upload_path() -> String {
    "/api/hr/courses/upload".to_string()
}

fn default_generate_path() -> String {
    "/api/hr/courses/generate".to_string()
}

fn default_publish_path() -> String {
    "/api/hr/courses/publish".to_string()
}

fn default_chat_path() -> String {
    "/api/hr/assistant/chat".to_string()
}

fn default_rest_path() -> String {
    "/rest/v1".to_string()
}

fn default_knowledge_path() -> String {
    "/api/hr/knowledge".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> BackendConfig {
        BackendConfig {
            base_url: "https://hr.example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_backend_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.rest_path, "/rest/v1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_valid_config() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_missing_base_url() {
        assert_eq!(
            BackendConfig::default().validate(),
            Err(ValidationError::MissingRequired("BACKEND__BASE_URL"))
        );
    }

    #[test]
    fn test_url_scheme_required() {
        let config = BackendConfig {
            base_url: "hr.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBackendUrl));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..configured()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_relative_path_rejected() {
        let config = BackendConfig {
            chat_path: "chat".to_string(),
            ..configured()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPath("chat_path")));
    }
}
