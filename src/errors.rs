use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

const MAX_UPSTREAM_MESSAGE_LEN: usize = 200;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    // Transport detail stays in logs.
    #[error("completion service unavailable")]
    UpstreamUnavailable(String),

    #[error("completion service rejected the request: {message}")]
    UpstreamRejected { status: u16, message: String },

    #[error("completion service returned no content")]
    EmptyCompletion,

    #[error("{0}")]
    MalformedOutput(String),

    #[error("{0}")]
    SchemaMismatch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            AppError::UpstreamRejected { .. } => "UPSTREAM_REJECTED",
            AppError::EmptyCompletion => "EMPTY_COMPLETION",
            AppError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            AppError::SchemaMismatch(_) => "SCHEMA_MISMATCH",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Builds an `UpstreamRejected` from whatever message the provider sent,
    /// falling back to a generic one and capping its length.
    pub fn upstream_rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("status {}", status));

        let message = if message.chars().count() > MAX_UPSTREAM_MESSAGE_LEN {
            let mut capped: String = message.chars().take(MAX_UPSTREAM_MESSAGE_LEN).collect();
            capped.push('…');
            capped
        } else {
            message
        };

        AppError::UpstreamRejected { status, message }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamRejected { .. }
            | AppError::EmptyCompletion
            | AppError::MalformedOutput(_)
            | AppError::SchemaMismatch(_)
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

/// A generated item that fails its field rules does not match the output schema.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::SchemaMismatch(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
