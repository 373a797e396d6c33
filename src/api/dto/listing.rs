//! DTOs for the owner listing endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::ShortUrl;

/// `GET /urls[?page=N]`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlItem {
    pub slug: String,
    pub url: String,
}

impl From<ShortUrl> for UrlItem {
    fn from(short_url: ShortUrl) -> Self {
        Self {
            slug: short_url.slug,
            url: short_url.url,
        }
    }
}
