use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::prediction::PredictionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Insufficient candidates: {0}")]
    InsufficientCandidates(String),

    #[error("Prediction timed out after {0}s")]
    Timeout(u64),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::DocumentParse(msg) => AppError::UnreadableDocument(msg),
            PredictionError::ModelLoad(msg) => AppError::ModelUnavailable(msg),
            e @ PredictionError::InsufficientCandidates { .. } => {
                AppError::InsufficientCandidates(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::UnreadableDocument(msg) => {
                tracing::warn!("Document parse failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNREADABLE_DOCUMENT",
                    "could not read document".to_string(),
                )
            }
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Model unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_UNAVAILABLE",
                    "The prediction model is not available".to_string(),
                )
            }
            AppError::InsufficientCandidates(msg) => {
                tracing::error!("Ranking failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INSUFFICIENT_CANDIDATES",
                    msg.clone(),
                )
            }
            AppError::Timeout(secs) => {
                tracing::warn!("Prediction exceeded {secs}s deadline");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "PREDICTION_TIMEOUT",
                    format!("Prediction did not finish within {secs}s"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
