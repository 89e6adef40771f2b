//! Application error handling
//!
//! This module is the single outcome-to-response contract for the API:
//! every entity operation resolves to one `ApiError` variant, and the
//! `IntoResponse` mapping below is the only place status codes are chosen.
//! Controllers never pick their own codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marina_shared::types::{ErrorDetail, ErrorResponse};
use marina_shared::validation::FieldError;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Malformed identifier")]
    MalformedIdentifier,

    #[error("Duplicate value for {0}")]
    DuplicateKey(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(sqlx::Error),
}

impl ApiError {
    /// Single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(field, message)])
    }
}

/// Translate store-layer errors at the boundary
///
/// A unique-index violation surfaces as `DuplicateKey` naming the
/// conflicting field; everything else stays opaque and maps to a 500.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.code().as_deref() == Some("23505") {
                let field = match db_err.constraint() {
                    Some("users_email_key") => "email",
                    Some("catways_catway_number_key") => "catway_number",
                    _ => "value",
                };
                return ApiError::DuplicateKey(field.to_string());
            }
        }
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid input".to_string(),
                Some(fields),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None),
            ApiError::MalformedIdentifier => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_IDENTIFIER",
                "Please enter a valid identifier".to_string(),
                None,
            ),
            ApiError::DuplicateKey(field) => {
                let fields = vec![FieldError::new(&field, "already exists")];
                (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_KEY",
                    format!("This {} already exists", field),
                    Some(fields),
                )
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                fields,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
