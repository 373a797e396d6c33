//! Durable mapping store implementations.
//!
//! # Repositories
//!
//! - [`PgShortUrlRepository`] - PostgreSQL storage using SQLx
//! - [`InMemoryShortUrlRepository`] - Process-local `DashMap` storage for
//!   tests and single-node development runs

pub mod memory_short_url_repository;
pub mod pg_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
