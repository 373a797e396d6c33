//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod slug;
pub mod unshorten;
pub mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use slug::slug_handler;
pub use unshorten::unshorten_handler;
pub use urls::urls_handler;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Plain text 200 response used by the slug-returning endpoints.
pub(crate) fn plain_text(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
