use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::prediction::extract::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Text extraction failed: {0}")]
    TextExtraction(String),

    #[error("No extractable text")]
    NoExtractableText,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::Unparseable(msg) => AppError::TextExtraction(msg),
            ExtractionError::Empty => AppError::NoExtractableText,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::TextExtraction(msg) => {
                tracing::warn!("Text extraction failed: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    "TEXT_EXTRACTION_FAILED",
                    "Failed to parse PDF. Please ensure the file is not corrupted or password-protected."
                        .to_string(),
                )
            }
            AppError::NoExtractableText => (
                StatusCode::BAD_REQUEST,
                "NO_EXTRACTABLE_TEXT",
                "No text content found in the PDF. Please upload a resume with readable text."
                    .to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
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
