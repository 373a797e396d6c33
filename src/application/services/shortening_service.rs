//! Mapping creation service.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::ShortenerError;
use crate::domain::owner::OwnerId;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::validation::{validate_slug, validate_url};

/// Service for creating slug to URL mappings.
///
/// Writes go to the durable store only. The cache is filled lazily by
/// [`crate::application::services::ResolutionService`] on the first read.
pub struct ShorteningService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ShorteningService {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Persists a mapping from `slug` to `url` owned by `owner`.
    ///
    /// # Order of checks
    ///
    /// 1. Slug validation, so malformed input never reaches the store
    /// 2. Occupancy pre-check against the store
    /// 3. URL validation
    /// 4. Insert, where the store's uniqueness constraint has the final word
    ///
    /// A malformed slug can never be occupied, so an occupied slug still
    /// reports [`ShortenerError::DuplicateSlug`] ahead of a bad URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::DuplicateSlug`] if the slug is occupied, either
    /// at the pre-check or because a concurrent insert won the race.
    /// Returns [`ShortenerError::InvalidInput`] if the slug or URL is malformed.
    /// Returns [`ShortenerError::Storage`] on store errors.
    pub async fn shorten(
        &self,
        slug: &str,
        url: &str,
        owner: &OwnerId,
    ) -> Result<ShortUrl, ShortenerError> {
        validate_slug(slug)?;

        if self.repository.exists(slug).await? {
            return Err(ShortenerError::DuplicateSlug(slug.to_string()));
        }

        validate_url(url)?;

        let new_short_url = NewShortUrl {
            slug: slug.to_string(),
            url: url.to_string(),
            owner_id: *owner,
            created_at: Utc::now(),
        };

        self.repository.insert(new_short_url).await
    }
}
