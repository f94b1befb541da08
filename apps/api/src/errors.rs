use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::response::ResponseError;
use crate::extraction::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure is terminal for its request: nothing is retried and no
/// partial analysis is returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("No extractable text found in the uploaded resume")]
    EmptyDocument,

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("External service error: {0}")]
    ExternalService(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction(ExtractError::UnsupportedFormat(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::Extraction(ExtractError::Parse { .. }) | AppError::EmptyDocument => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Response(_) | AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            AppError::Extraction(ExtractError::UnsupportedFormat(_)) => "UNSUPPORTED_FORMAT",
            AppError::Extraction(ExtractError::Parse { .. }) => "PARSE_ERROR",
            AppError::EmptyDocument => "EMPTY_DOCUMENT",
            AppError::Response(ResponseError::EmptyResponse) => "EMPTY_RESPONSE",
            AppError::Response(ResponseError::NoJsonFound) => "NO_JSON_FOUND",
            AppError::Response(ResponseError::MalformedJson(_)) => "MALFORMED_JSON",
            AppError::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::PayloadTooLarge { limit } => format!(
                "The uploaded file is too large. The maximum size is {limit} bytes."
            ),
            AppError::Extraction(ExtractError::UnsupportedFormat(tag)) => format!(
                "Unsupported file type: {tag}. Please upload a PDF or DOCX resume."
            ),
            AppError::Extraction(err @ ExtractError::Parse { .. }) => {
                format!("Error parsing resume: {err}")
            }
            AppError::EmptyDocument => "No text could be extracted from the resume. \
                Scanned or image-only documents are not supported."
                .to_string(),
            AppError::Response(ResponseError::EmptyResponse) => {
                "Empty response from the AI service. Please try again.".to_string()
            }
            AppError::Response(ResponseError::NoJsonFound) => {
                "Could not find valid JSON in the response. Please try again.".to_string()
            }
            AppError::Response(ResponseError::MalformedJson(_)) => {
                "The AI service returned malformed JSON. Please try again.".to_string()
            }
            AppError::ExternalService(_) => {
                "Error calling the AI service. Please try again later.".to_string()
            }
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ExternalService(e) => tracing::error!("External service error: {e}"),
            AppError::Response(e) => tracing::error!("Unusable AI response: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            other => tracing::warn!("Request rejected: {other}"),
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status(), body).into_response()
    }
}
