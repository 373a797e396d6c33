//! Owner session cookie handling.
//!
//! The session cookie carries the anonymous owner id signed by
//! [`crate::application::services::SessionService`]. A missing, malformed or
//! forged cookie is not an error: the request simply has no owner yet.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use std::convert::Infallible;

use crate::domain::owner::OwnerId;
use crate::state::AppState;

/// Name of the cookie holding the owner token.
pub const SESSION_COOKIE: &str = "owner";

/// Owner resolved from the session cookie, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOwner(pub Option<OwnerId>);

impl SessionOwner {
    pub fn owner(&self) -> Option<&OwnerId> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for SessionOwner {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let owner = session_token(&parts.headers)
            .and_then(|token| state.session_service.verify(&token));

        Ok(Self(owner))
    }
}

/// Extracts the raw `owner` cookie value from the request headers.
///
/// Handles several cookies in one header and several `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                _ => None,
            }
        })
}

/// Builds the `Set-Cookie` value for a freshly issued session token.
pub fn session_cookie(token: &str, max_age_seconds: u64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}"
    )
}
