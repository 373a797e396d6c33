//! Short URL entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::owner::OwnerId;

/// A persisted mapping between a slug and a long URL.
///
/// Mappings are immutable once created: no operation changes `url` or
/// `owner_id`, and the core never deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortUrl {
    pub slug: String,
    pub url: String,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(slug: String, url: String, owner_id: OwnerId, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            url,
            owner_id,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub slug: String,
    pub url: String,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

impl From<NewShortUrl> for ShortUrl {
    fn from(new: NewShortUrl) -> Self {
        ShortUrl::new(new.slug, new.url, new.owner_id, new.created_at)
    }
}
