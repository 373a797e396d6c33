//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for durable storage; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ShortUrlRepository`] - Slug to URL mapping storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_short_url.rs` for the
//! PostgreSQL implementation.

pub mod short_url_repository;

pub use short_url_repository::{Page, ShortUrlRepository};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
