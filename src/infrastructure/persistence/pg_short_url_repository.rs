//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::ShortenerError;
use crate::domain::owner::OwnerId;
use crate::domain::repositories::{Page, ShortUrlRepository};
use crate::utils::db_error::{is_unique_violation_on_slug, storage_error};

/// Row shape of the `short_urls` table.
#[derive(Debug, FromRow)]
struct ShortUrlRow {
    slug: String,
    url: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(
            row.slug,
            row.url,
            OwnerId::from_uuid(row.owner_id),
            row.created_at,
        )
    }
}

/// PostgreSQL repository for slug mappings.
///
/// Uniqueness is enforced by the `short_urls_pkey` primary key; a violation
/// on insert is reported as [`ShortenerError::DuplicateSlug`].
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn exists(&self, slug: &str) -> Result<bool, ShortenerError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM short_urls WHERE slug = $1)")
            .bind(slug)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(storage_error)
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, ShortenerError> {
        let result = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (slug, url, owner_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING slug, url, owner_id, created_at
            "#,
        )
        .bind(&new_short_url.slug)
        .bind(&new_short_url.url)
        .bind(new_short_url.owner_id.as_uuid())
        .bind(new_short_url.created_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_slug(&e) => {
                Err(ShortenerError::DuplicateSlug(new_short_url.slug))
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, ShortenerError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            "SELECT slug, url, owner_id, created_at FROM short_urls WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(storage_error)?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(
        &self,
        owner: &OwnerId,
        page: Option<Page>,
    ) -> Result<Vec<ShortUrl>, ShortenerError> {
        let (limit, offset) = match page {
            Some(page) => (Some(page.limit), page.offset),
            None => (None, 0),
        };

        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT slug, url, owner_id, created_at
            FROM short_urls
            WHERE owner_id = $1
            ORDER BY created_at ASC, slug ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner.as_uuid())
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, ShortenerError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(storage_error)
    }
}
