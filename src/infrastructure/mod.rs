//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers, providing concrete storage and caching backends.
//!
//! # Modules
//!
//! - [`cache`] - Read-through cache backends (Redis and no-op)
//! - [`persistence`] - Durable mapping stores (PostgreSQL and in-memory)

pub mod cache;
pub mod persistence;
