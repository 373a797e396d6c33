//! Query parameters for `GET /unshorten`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UnshortenParams {
    pub slug: Option<String>,
}
