//! Data Transfer Objects for API requests and responses.
//!
//! Query strings are parsed with `serde_with` so malformed numbers surface
//! as our own 400 responses instead of axum's default rejections.

pub mod health;
pub mod listing;
pub mod shorten;
pub mod slug;
pub mod unshorten;
