use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ContentKindTag, ModelSettings},
    services::schema_validator::ItemValidationPolicy,
};

const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub completion_api_url: String,
    pub completion_api_key: SecretString,
    pub completion_model: String,
    pub flashcard_temperature: f32,
    pub quiz_temperature: f32,
    pub upstream_timeout_seconds: u64,
    pub max_concurrent_upstream: usize,
    pub item_validation: ItemValidationPolicy,
}

impl Config {
    /// Reads the environment. Values that are present but cannot be understood
    /// are reported rather than replaced by a default.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_var("WEB_SERVER_PORT").unwrap_or(3000),
            completion_api_url: env::var("COMPLETION_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            completion_api_key: SecretString::from(
                env::var("COMPLETION_API_KEY")
                    .or_else(|_| env::var("OPENAI_API_KEY"))
                    .unwrap_or_default(),
            ),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            flashcard_temperature: parse_var("FLASHCARD_TEMPERATURE").unwrap_or(0.3),
            quiz_temperature: parse_var("QUIZ_TEMPERATURE").unwrap_or(0.5),
            upstream_timeout_seconds: parse_var("UPSTREAM_TIMEOUT_SECONDS").unwrap_or(30),
            max_concurrent_upstream: parse_var("MAX_CONCURRENT_UPSTREAM").unwrap_or(8),
            item_validation: parse_item_validation(env::var("ITEM_VALIDATION").ok())?,
        })
    }

    /// Checks everything the service needs before it starts accepting requests.
    pub fn validate(&self) -> AppResult<()> {
        if self.completion_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::Configuration(
                "COMPLETION_API_KEY is not set".to_string(),
            ));
        }

        let url = reqwest::Url::parse(&self.completion_api_url).map_err(|e| {
            AppError::Configuration(format!(
                "COMPLETION_API_URL '{}' is not a valid URL: {}",
                self.completion_api_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Configuration(format!(
                "COMPLETION_API_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.completion_model.trim().is_empty() {
            return Err(AppError::Configuration(
                "COMPLETION_MODEL must not be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("FLASHCARD_TEMPERATURE", self.flashcard_temperature),
            ("QUIZ_TEMPERATURE", self.quiz_temperature),
        ] {
            if !TEMPERATURE_RANGE.contains(&value) {
                return Err(AppError::Configuration(format!(
                    "{} must be between 0.0 and 2.0, got {}",
                    name, value
                )));
            }
        }

        if self.upstream_timeout_seconds == 0 {
            return Err(AppError::Configuration(
                "UPSTREAM_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        if self.max_concurrent_upstream == 0 {
            return Err(AppError::Configuration(
                "MAX_CONCURRENT_UPSTREAM must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    pub fn model_settings(&self, kind: ContentKindTag) -> ModelSettings {
        let temperature = match kind {
            ContentKindTag::Flashcards => self.flashcard_temperature,
            ContentKindTag::Quiz => self.quiz_temperature,
        };

        ModelSettings {
            model: self.completion_model.clone(),
            temperature,
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            completion_api_url: "http://localhost:9999/v1/chat/completions".to_string(),
            completion_api_key: SecretString::from("test_api_key".to_string()),
            completion_model: "test-model".to_string(),
            flashcard_temperature: 0.3,
            quiz_temperature: 0.5,
            upstream_timeout_seconds: 5,
            max_concurrent_upstream: 2,
            item_validation: ItemValidationPolicy::Filter,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_item_validation(value: Option<String>) -> AppResult<ItemValidationPolicy> {
    match value {
        None => Ok(ItemValidationPolicy::default()),
        Some(raw) if raw.trim().is_empty() => Ok(ItemValidationPolicy::default()),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::Configuration(format!(
                "ITEM_VALIDATION must be 'filter' or 'strict', got '{}'",
                raw
            ))
        }),
    }
}
