//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::ShortenerError;
use crate::domain::owner::OwnerId;
use crate::domain::repositories::{Page, ShortUrlRepository};

/// In-memory mapping store backed by `DashMap`.
///
/// `DashMap` shards its locks, so concurrent lookups and inserts on different
/// slugs do not block each other. Insert goes through the entry API, which
/// holds the shard lock between the occupancy check and the write; two
/// concurrent inserts of the same slug cannot both succeed.
///
/// Contents live only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlRepository {
    storage: DashMap<String, ShortUrl>,
}

impl InMemoryShortUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates an empty repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn exists(&self, slug: &str) -> Result<bool, ShortenerError> {
        Ok(self.storage.contains_key(slug))
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, ShortenerError> {
        match self.storage.entry(new_short_url.slug.clone()) {
            Entry::Occupied(_) => Err(ShortenerError::DuplicateSlug(new_short_url.slug)),
            Entry::Vacant(vacant) => {
                let short_url: ShortUrl = new_short_url.into();
                vacant.insert(short_url.clone());
                Ok(short_url)
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, ShortenerError> {
        Ok(self.storage.get(slug).map(|entry| entry.value().clone()))
    }

    async fn list_by_owner(
        &self,
        owner: &OwnerId,
        page: Option<Page>,
    ) -> Result<Vec<ShortUrl>, ShortenerError> {
        let mut owned: Vec<ShortUrl> = self
            .storage
            .iter()
            .filter(|entry| entry.value().owner_id == *owner)
            .map(|entry| entry.value().clone())
            .collect();

        owned.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        Ok(match page {
            Some(page) => owned
                .into_iter()
                .skip(usize::try_from(page.offset).unwrap_or(0))
                .take(usize::try_from(page.limit).unwrap_or(0))
                .collect(),
            None => owned,
        })
    }

    async fn count(&self) -> Result<i64, ShortenerError> {
        Ok(self.storage.len() as i64)
    }
}
