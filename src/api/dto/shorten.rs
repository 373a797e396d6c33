//! DTOs for the shortening endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;

/// Body of `POST /shorten`.
///
/// Both fields are optional at the parsing level so that a missing `url`
/// produces our own 400 rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
    pub slug: Option<String>,
}

impl ShortenRequest {
    /// Returns the target URL or a 400 if the caller omitted it.
    pub fn require_url(&self) -> Result<&str, AppError> {
        self.url
            .as_deref()
            .ok_or_else(|| AppError::bad_request("Missing required field: url", json!({})))
    }
}

/// Extractor accepting either a JSON or a URL-encoded form body.
///
/// The body is parsed as JSON when the `Content-Type` is `application/json`
/// (or a `+json` subtype) and as a form otherwise.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(body) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text(), json!({ "body": "json" })))?;
            Ok(Self(body))
        } else {
            let Form(body) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text(), json!({ "body": "form" })))?;
            Ok(Self(body))
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
