//! Settings for the backend connection, the assistant session and logging.
//!
//! Values come from `COURSE_DESIGNER__<SECTION>__<KEY>` environment
//! variables, with a `.env` file read first when one exists. Every field
//! has a default except `backend.base_url`.
//!
//! ```no_run
//! use course_designer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration should load");
//! config.validate().expect("configuration should be valid");
//! println!("Backend at {}", config.backend.base_url);
//! ```

mod assistant;
mod backend;
mod error;
mod logging;

pub use assistant::{AssistantConfig, MAX_HISTORY_WINDOW};
pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root of the configuration tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HR backend endpoints and credentials
    #[serde(default)]
    pub backend: BackendConfig,

    /// Session behavior
    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and the `COURSE_DESIGNER` environment.
    ///
    /// `COURSE_DESIGNER__ASSISTANT__HISTORY_WINDOW=8` sets
    /// `assistant.history_window`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COURSE_DESIGNER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Rejects a missing or malformed backend URL, a zero timeout, a
    /// history window outside 1..=50 and unknown log levels.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        self.assistant.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
