use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is terminal for the request that produced it; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Set the Gemini API key before generating")]
    MissingApiKey,

    #[error("No source material was provided (transcript, documents and web info are all empty)")]
    EmptyMaterial,

    /// Any failure reported by the model provider. The message is shown verbatim.
    #[error("Generation failed: {0}")]
    Provider(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::MissingApiKey => (StatusCode::BAD_REQUEST, "MISSING_API_KEY"),
            AppError::EmptyMaterial => (StatusCode::BAD_REQUEST, "EMPTY_MATERIAL"),
            AppError::Provider(e) => {
                tracing::error!("Provider error: {e}");
                (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR")
            }
        };

        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
