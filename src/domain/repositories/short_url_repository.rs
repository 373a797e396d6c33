//! Repository trait for short URL mappings.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::ShortenerError;
use crate::domain::owner::OwnerId;
use async_trait::async_trait;

/// A window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Durable mapping store keyed by slug.
///
/// # Uniqueness
///
/// Implementations must reject a second insert of an already present slug
/// with [`ShortenerError::DuplicateSlug`]. This is the final arbiter of slug
/// uniqueness; callers' existence pre-checks only make the common case fast.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - `DashMap`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Checks whether a slug is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] on backend errors.
    async fn exists(&self, slug: &str) -> Result<bool, ShortenerError>;

    /// Inserts a mapping if the slug is free.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::DuplicateSlug`] if the slug is already taken.
    /// Returns [`ShortenerError::Storage`] on backend errors.
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, ShortenerError>;

    /// Finds a mapping by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] on backend errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, ShortenerError>;

    /// Lists mappings created by `owner`, oldest first.
    ///
    /// `page = None` returns every mapping of the owner.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] on backend errors.
    async fn list_by_owner(
        &self,
        owner: &OwnerId,
        page: Option<Page>,
    ) -> Result<Vec<ShortUrl>, ShortenerError>;

    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] on backend errors.
    async fn count(&self) -> Result<i64, ShortenerError>;
}
