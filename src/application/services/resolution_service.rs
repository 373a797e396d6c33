//! Cache-aside slug resolution.

use std::sync::Arc;

use crate::domain::error::ShortenerError;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::validation::is_well_formed_slug;
use crate::infrastructure::cache::CacheService;

/// Resolves slugs to URLs, consulting the cache before the durable store.
///
/// # Read path
///
/// 1. Cache hit: returned immediately, the store is not touched
/// 2. Cache miss: store lookup, then the result is written back to the cache
/// 3. Unknown slug: [`ShortenerError::Unshorten`]
///
/// Slugs outside the slug grammar are unknown by definition and are answered
/// without touching the cache or the store.
///
/// Cache errors never fail a lookup. A failed read counts as a miss and a
/// failed write is counted and dropped.
pub struct ResolutionService {
    repository: Arc<dyn ShortUrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Returns the URL registered for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Unshorten`] if no mapping exists.
    /// Returns [`ShortenerError::Storage`] if the cache missed and the store failed.
    pub async fn unshorten(&self, slug: &str) -> Result<String, ShortenerError> {
        if !is_well_formed_slug(slug) {
            return Err(ShortenerError::Unshorten(slug.to_string()));
        }

        match self.cache.get_url(slug).await {
            Ok(Some(url)) => {
                metrics::counter!("slug_cache_hits_total").increment(1);
                return Ok(url);
            }
            Ok(None) => metrics::counter!("slug_cache_misses_total").increment(1),
            Err(_) => metrics::counter!("slug_cache_read_failures_total").increment(1),
        }

        let short_url = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ShortenerError::Unshorten(slug.to_string()))?;

        self.populate_cache(slug, &short_url.url).await;

        Ok(short_url.url)
    }

    async fn populate_cache(&self, slug: &str, url: &str) {
        if self.cache.set_url(slug, url, None).await.is_err() {
            metrics::counter!("slug_cache_write_failures_total").increment(1);
        }
    }
}
