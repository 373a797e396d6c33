//! Handler for slug lookup.

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde_json::json;

use crate::api::dto::unshorten::UnshortenParams;
use crate::api::handlers::plain_text;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the URL a slug points to.
///
/// # Endpoint
///
/// `GET /unshorten?slug={slug}`
///
/// # Errors
///
/// - 400 if `slug` is missing
/// - 404 if no mapping exists
pub async fn unshorten_handler(
    State(state): State<AppState>,
    Query(params): Query<UnshortenParams>,
) -> Result<Response, AppError> {
    let slug = params
        .slug
        .ok_or_else(|| AppError::bad_request("Missing required parameter: slug", json!({})))?;

    let url = state.resolution_service.unshorten(&slug).await?;

    Ok(plain_text(url))
}
