//! Runtime configuration for the Gemini client.
//!
//! The environment is read once, at the binary edge, and the resulting
//! [`Config`] is passed explicitly into [`crate::llm::GeminiClient::new`].

use std::env;

use crate::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable to override the default model.
pub const MODEL_ENV_VAR: &str = "GEMINI_MODEL";

/// Environment variable to override the API base URL.
pub const ENDPOINT_ENV_VAR: &str = "GEMINI_API_BASE";

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credentials and target for the generation endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl Config {
    /// Create a config with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required and must be non-empty. `GEMINI_MODEL` and
    /// `GEMINI_API_BASE` are optional; empty values fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = non_empty_var(API_KEY_ENV_VAR).ok_or(ConfigError::MissingApiKey)?;

        let mut config = Config::new(api_key);
        if let Some(model) = non_empty_var(MODEL_ENV_VAR) {
            config = config.with_model(model);
        }
        if let Some(endpoint) = non_empty_var(ENDPOINT_ENV_VAR) {
            config = config.with_endpoint(endpoint);
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL. A trailing `/` is dropped.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
