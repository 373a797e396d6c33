//! HTTP-facing error type.
//!
//! [`AppError`] is the only place where core errors become status codes and
//! response bodies. Bodies are plain text, matching the success responses of
//! the shortening endpoints.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::error::ShortenerError;

pub const DUPLICATE_SLUG_MESSAGE: &str = "This slug is already occupied.";
pub const SLUG_SPACE_EXHAUSTED_MESSAGE: &str =
    "Random slug space is exhausted. Try shortening with a longer slug.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidLength(length) => AppError::bad_request(
                format!("Slug length must be between 1 and 50, got {length}"),
                json!({ "length": length }),
            ),
            ShortenerError::SlugSpaceExhausted { length } => {
                AppError::conflict(SLUG_SPACE_EXHAUSTED_MESSAGE, json!({ "length": length }))
            }
            ShortenerError::DuplicateSlug(slug) => {
                AppError::conflict(DUPLICATE_SLUG_MESSAGE, json!({ "slug": slug }))
            }
            ShortenerError::InvalidInput { field, reason } => AppError::bad_request(
                format!("Invalid {field}: {reason}"),
                json!({ "field": field.to_string() }),
            ),
            ShortenerError::Unshorten(slug) => {
                AppError::not_found("Short URL not found", json!({ "slug": slug }))
            }
            ShortenerError::Storage(reason) => {
                AppError::internal("Internal server error", json!({ "reason": reason }))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{message}");
                message
            }
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details } => {
                tracing::debug!(%status, %details, "{message}");
                message
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
