//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Redis cache implementation for fast slug lookups.
///
/// Uses `ConnectionManager` for automatic reconnection. Backend errors are
/// logged here and returned to the caller, which decides whether they matter.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_url`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {e}"))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "slug:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, slug: &str) -> String {
        format!("{}{}", self.key_prefix, slug)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!(slug, "Cache HIT");
                Ok(Some(url))
            }
            Ok(None) => {
                debug!(slug, "Cache MISS");
                Ok(None)
            }
            Err(e) => {
                warn!(slug, error = %e, "Redis GET failed");
                Err(CacheError::OperationError(e.to_string()))
            }
        }
    }

    async fn set_url(&self, slug: &str, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&key, url, ttl_seconds).await {
            Ok(()) => {
                debug!(slug, ttl_seconds, "Cache SET");
                Ok(())
            }
            Err(e) => {
                warn!(slug, error = %e, "Redis SET failed");
                Err(CacheError::OperationError(e.to_string()))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
