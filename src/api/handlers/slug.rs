//! Handler for standalone slug generation.

use axum::{
    extract::{Query, State},
    response::Response,
};

use crate::api::dto::slug::SlugParams;
use crate::api::handlers::plain_text;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a slug that is free at the time of the call.
///
/// No mapping is created, so a later `POST /shorten` with this slug may
/// still lose to a concurrent writer.
///
/// # Endpoint
///
/// `GET /slug?length={n}`
///
/// # Errors
///
/// - 400 if `length` is missing, not an integer, or outside `1..=50`
/// - 409 if no free slug was found within the retry bound
pub async fn slug_handler(
    State(state): State<AppState>,
    Query(params): Query<SlugParams>,
) -> Result<Response, AppError> {
    let length = params.length()?;

    let slug = state.slug_allocator.generate_unique_slug(length).await?;

    Ok(plain_text(slug))
}
