//! Typed errors surfaced by the core services.
//!
//! The core never maps these to HTTP responses; see
//! [`crate::error::AppError`] for the boundary translation.

use thiserror::Error;

use crate::domain::validation::{Field, ValidationFailure};

/// Errors produced by slug allocation, shortening and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// Requested random slug length is outside the allowed range.
    #[error("invalid slug length: {0}")]
    InvalidLength(usize),

    /// The allocator exceeded its retry bound for the given length.
    #[error("random slug space of length {length} is exhausted")]
    SlugSpaceExhausted { length: usize },

    /// The slug is already occupied by another mapping.
    #[error("slug '{0}' is already occupied")]
    DuplicateSlug(String),

    /// The slug or URL failed format or length validation.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: String },

    /// No mapping exists for the slug.
    #[error("no URL is registered for slug '{0}'")]
    Unshorten(String),

    /// The durable store failed (connection loss, query error).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<ValidationFailure> for ShortenerError {
    fn from(failure: ValidationFailure) -> Self {
        Self::InvalidInput {
            field: failure.field,
            reason: failure.reason,
        }
    }
}
