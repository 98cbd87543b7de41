use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ModelSettings, Prompt, RawCompletion},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &Prompt, settings: &ModelSettings) -> AppResult<RawCompletion>;
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct HttpCompletionClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = ClientBuilder::new()
            .timeout(config.upstream_timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.completion_api_url.clone(),
            api_key: config.completion_api_key.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, prompt: &Prompt, settings: &ModelSettings) -> AppResult<RawCompletion> {
        let body = ChatCompletionRequest {
            model: &settings.model,
            temperature: settings.temperature,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() {
                    "timed out"
                } else if e.is_connect() {
                    "connection failed"
                } else {
                    "request failed"
                };
                AppError::UpstreamUnavailable(format!("{}: {}", kind, e))
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!(
                "Completion service responded with status {}: {}",
                status.as_u16(),
                text
            );
            return Err(AppError::upstream_rejected(
                status.as_u16(),
                extract_error_message(&text),
            ));
        }

        extract_completion_text(&text)
    }
}

/// Pulls the first choice's message content out of a success body.
pub fn extract_completion_text(body: &str) -> AppResult<RawCompletion> {
    let parsed: ChatCompletionResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Completion body could not be read ({}): {}", e, body);
            return Err(AppError::EmptyCompletion);
        }
    };

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .map(RawCompletion)
        .ok_or_else(|| {
            log::warn!("Completion body carried no text: {}", body);
            AppError::EmptyCompletion
        })
}

/// Finds the provider's error message in a failure body, if there is one.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let message = match value.get("error") {
        Some(Value::Object(error)) => error.get("message").and_then(Value::as_str),
        Some(Value::String(error)) => Some(error.as_str()),
        _ => None,
    }
    .or_else(|| value.get("message").and_then(Value::as_str))?;

    Some(message.to_string())
}
