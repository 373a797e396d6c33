//! Core domain entities.
//!
//! The service persists a single entity, [`ShortUrl`]. Creation input is
//! carried separately by [`NewShortUrl`] so that repositories receive exactly
//! the fields they must write.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
