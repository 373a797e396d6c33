//! Handler for the shortening endpoint.

use axum::{
    extract::State,
    http::{HeaderValue, header::SET_COOKIE},
    response::Response,
};
use serde_json::json;
use tracing::info;

use crate::api::dto::shorten::ShortenPayload;
use crate::api::handlers::plain_text;
use crate::api::session::{SessionOwner, session_cookie};
use crate::domain::owner::OwnerId;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping and returns its slug.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// JSON (`Content-Type: application/json`) or URL-encoded form:
///
/// ```json
/// { "url": "https://example.com/some/long/path", "slug": "my-link" }
/// ```
///
/// `slug` is optional. When omitted, a random slug of the configured default
/// length is allocated.
///
/// # Response
///
/// `200 OK`, `text/plain` body containing the slug. Callers without a valid
/// session cookie receive a new one bound to the owner of this mapping.
///
/// # Errors
///
/// - 400 if `url` is missing or the slug/URL fails validation
/// - 409 if the slug is occupied or the random slug space is exhausted
pub async fn shorten_handler(
    State(state): State<AppState>,
    session: SessionOwner,
    ShortenPayload(request): ShortenPayload,
) -> Result<Response, AppError> {
    let url = request.require_url()?;

    let (owner, new_session) = match session.0 {
        Some(owner) => (owner, false),
        None => (OwnerId::new(), true),
    };

    let slug = match request.slug.as_deref() {
        Some(slug) => slug.to_string(),
        None => {
            state
                .slug_allocator
                .generate_unique_slug(state.default_slug_length)
                .await?
        }
    };

    let short_url = state
        .shortening_service
        .shorten(&slug, url, &owner)
        .await?;

    info!(slug = %short_url.slug, owner = %owner, "Short URL created");

    let mut response = plain_text(short_url.slug);

    if new_session {
        let token = state.session_service.issue(&owner);
        let cookie = session_cookie(&token, state.session_max_age_seconds);
        let value = HeaderValue::from_str(&cookie).map_err(|e| {
            AppError::internal("Internal server error", json!({ "reason": e.to_string() }))
        })?;
        response.headers_mut().insert(SET_COOKIE, value);
    }

    Ok(response)
}
