use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use warung_core::config::LlmConfig;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion endpoint returned status {status}")]
    Http { status: u16 },
    #[error("completion response contained no choices")]
    EmptyResponse,
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

/// OpenAI-compatible `/chat/completions` client. Works against DeepSeek and
/// any other provider speaking the same wire format.
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageBody,
}

#[derive(Deserialize)]
struct MessageBody {
    content: Option<String>,
}

impl ChatCompletionsClient {
    /// Build a client from config. Returns `None` when the endpoint is not
    /// configured; only the fallback path cares.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>, reqwest::Error> {
        if !config.is_configured() {
            return Ok(None);
        }
        let (Some(base_url), Some(api_key)) = (&config.base_url, &config.api_key) else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }))
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage { role: "system", content: system },
                WireMessage { role: "user", content: user },
            ],
            max_tokens: self.max_tokens,
        };

        debug!(
            event_name = "agent.completion.request",
            model = %self.model,
            url = %url,
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Http { status: status.as_u16() });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
