//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Resolution goes through [`crate::application::services::ResolutionService`],
/// so a warm cache answers without touching the store. The `Location` header
/// carries the parsed serialization of the URL: non-ASCII paths are
/// percent-encoded and international hosts are punycode.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
/// Returns 500 if the stored URL no longer parses.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.resolution_service.unshorten(&slug).await?;

    debug!(%slug, %url, "Redirecting");

    let location = location_header(&url).map_err(|reason| {
        AppError::internal(
            "Internal server error",
            json!({ "slug": slug, "reason": reason }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn location_header(url: &str) -> Result<HeaderValue, String> {
    let parsed = Url::parse(url).map_err(|e| e.to_string())?;
    HeaderValue::from_str(parsed.as_str()).map_err(|e| e.to_string())
}
