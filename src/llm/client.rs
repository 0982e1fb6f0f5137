//! Gemini `generateContent` client.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::GenerateError;
use crate::llm::response::validate_response;
use crate::llm::types::{GenerateContentRequest, GenerateContentResponse};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Prompt in, generated text out.
///
/// This abstraction allows swapping the remote model for a deterministic fake in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt, returning the validated message.
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// HTTP client for the Gemini REST API.
///
/// One non-streaming request per call. No retries and no client timeout.
pub struct GeminiClient {
    config: Config,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.config.api_key.trim().is_empty() {
            warn!("Gemini API key is empty; refusing to send request");
            return Err(GenerateError::MissingApiKey);
        }
        Ok(())
    }

    /// Send the prompt and return the raw response envelope.
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GenerateError> {
        self.validate()?;

        let request = GenerateContentRequest::from_prompt(prompt);
        debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let error_kind = if e.is_connect() {
                    "connect"
                } else if e.is_request() {
                    "request"
                } else {
                    "unknown"
                };
                let cause = error_chain(&e);
                debug!(error = %cause, error_kind, "generateContent request failed");
                GenerateError::Request(format!("{error_kind} error: {cause}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %body, "Gemini API returned error status");
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                GenerateError::Request(format!("invalid response body: {}", error_chain(&e)))
            })
    }
}

/// Render an error and every `source()` below it as `outer: inner: ...`.
///
/// reqwest's own `Display` stops at the top level ("error sending request"),
/// which hides the connect or TLS failure underneath.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = inner.source();
    }
    rendered
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let response = self.generate_content(prompt).await?;
        validate_response(&response)
    }
}
