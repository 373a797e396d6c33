//! Owner-scoped listing of mappings.

use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::error::ShortenerError;
use crate::domain::owner::OwnerId;
use crate::domain::repositories::{Page, ShortUrlRepository};

/// Number of mappings per listing page.
pub const PAGE_SIZE: i64 = 50;

/// Lists the mappings created by one ephemeral owner.
pub struct ListingService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns every mapping created by `owner`, oldest first.
    ///
    /// An absent owner has created nothing, so the store is not queried.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] on store errors.
    pub async fn list_by_owner(
        &self,
        owner: Option<&OwnerId>,
    ) -> Result<Vec<ShortUrl>, ShortenerError> {
        match owner {
            Some(owner) => self.repository.list_by_owner(owner, None).await,
            None => Ok(Vec::new()),
        }
    }

    /// Returns one page (1-indexed, [`PAGE_SIZE`] items) of `owner`'s mappings.
    ///
    /// Page 0 is treated as page 1.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] on store errors.
    pub async fn list_page_by_owner(
        &self,
        owner: Option<&OwnerId>,
        page: u32,
    ) -> Result<Vec<ShortUrl>, ShortenerError> {
        let Some(owner) = owner else {
            return Ok(Vec::new());
        };

        let page = Page {
            limit: PAGE_SIZE,
            offset: (i64::from(page.max(1)) - 1) * PAGE_SIZE,
        };

        self.repository.list_by_owner(owner, Some(page)).await
    }
}
