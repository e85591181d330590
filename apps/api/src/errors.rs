use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Proxy error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("Upstream provider error (status {status})")]
    Upstream { status: u16, info: String },

    #[error("Failed to parse AI response")]
    AiParse { content: String },

    #[error("Server error: {0}")]
    Server(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, body } => AppError::Upstream { status, info: body },
            LlmError::Parse { content } => AppError::AiParse { content },
            LlmError::Transport(e) => AppError::Server(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotConfigured(var) => {
                tracing::error!("Enhancement requested but {var} is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Server not configured: missing {var}") }),
                )
            }
            AppError::Upstream { status, info } => {
                tracing::error!("OpenRouter returned {status}: {info}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "OpenRouter API error", "info": info }),
                )
            }
            AppError::AiParse { content } => {
                tracing::error!("AI reply is not a JSON object ({} bytes)", content.len());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to parse AI response", "content": content }),
                )
            }
            AppError::Server(message) => {
                tracing::error!("Server error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server error", "message": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
