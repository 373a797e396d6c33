//! API route configuration.

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, slug_handler, unshorten_handler,
    urls_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Every public route of the service.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create a mapping (JSON or form body)
/// - `GET  /unshorten?slug=`  - Look up a mapping
/// - `GET  /slug?length=`     - Generate a free slug without creating a mapping
/// - `GET  /urls[?page=]`     - List the current session's mappings
/// - `GET  /health`           - Health check: store and cache
/// - `GET  /{slug}`           - Redirect to the mapped URL
///
/// Static segments take priority over `/{slug}`, which is why their names are
/// reserved and never handed out as slugs.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/unshorten", get(unshorten_handler))
        .route("/slug", get(slug_handler))
        .route("/urls", get(urls_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
}
