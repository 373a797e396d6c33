//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    ConnectionError(String),
    #[error("cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching slug to URL mappings.
///
/// Implementations report failures as [`CacheError`]; the resolution path
/// treats them as misses or skipped writes, so a cache outage degrades
/// latency, never correctness.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the URL for a slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be reached.
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>>;

    /// Stores a slug to URL mapping.
    ///
    /// # Arguments
    ///
    /// - `slug` - The cache key
    /// - `url` - The long URL to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the write did not reach the backend.
    async fn set_url(&self, slug: &str, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
