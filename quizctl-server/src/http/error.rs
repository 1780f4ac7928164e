//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quizctl_core::{CompensationError, Error, ValidationError};
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not a question (422)
    InvalidBody { message: String },

    /// Question or option invariant violated (422)
    Validation(ValidationError),

    /// Malformed path or query parameter (400)
    BadRequest { message: String },

    /// Question not found (404)
    NotFound { id: i64 },

    /// Store failure (500, logged)
    Persistence(Error),

    /// Create could not clean up after itself (500, logged)
    Compensation(CompensationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidBody { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "invalid_body",
                    "message": message
                }),
            ),
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "bad_request",
                    "message": message
                }),
            ),
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("question {} not found", id)
                }),
            ),
            Self::Persistence(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::Compensation(e) => {
                tracing::error!(question_id = e.question_id, "Inconsistent state: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "inconsistent_state",
                        "message": format!(
                            "question {} could not be stored and may need manual cleanup",
                            e.question_id
                        )
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(e) => Self::Validation(e),
            Error::NotFound { id } => Self::NotFound { id },
            Error::Compensation(e) => Self::Compensation(e),
            e @ Error::Persistence { .. } => Self::Persistence(e),
        }
    }
}
