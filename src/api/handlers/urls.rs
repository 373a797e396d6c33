//! Handler for the owner's mapping list.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::listing::{ListParams, UrlItem};
use crate::api::session::SessionOwner;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the mappings created by the current session.
///
/// # Endpoint
///
/// `GET /urls` or `GET /urls?page={n}`
///
/// Without `page` every mapping is returned; with it, one page of 50.
/// Requests without a valid session cookie get an empty array.
///
/// # Response
///
/// ```json
/// [
///   { "slug": "abc123", "url": "https://example.com" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 if `page` is not a positive integer.
pub async fn urls_handler(
    State(state): State<AppState>,
    session: SessionOwner,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<UrlItem>>, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::bad_request("Page must be a positive integer", json!({ "reason": e.body_text() }))
    })?;

    let short_urls = match params.page {
        None => state.listing_service.list_by_owner(session.owner()).await?,
        Some(0) => {
            return Err(AppError::bad_request(
                "Page must be a positive integer",
                json!({ "page": 0 }),
            ));
        }
        Some(page) => {
            state
                .listing_service
                .list_page_by_owner(session.owner(), page)
                .await?
        }
    };

    Ok(Json(short_urls.into_iter().map(UrlItem::from).collect()))
}
