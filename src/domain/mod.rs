//! Domain layer containing business entities, errors and validation rules.
//!
//! The domain layer has no dependencies on HTTP, PostgreSQL or Redis. It
//! defines what a short URL mapping is, which slugs and URLs are acceptable,
//! and the repository contract the infrastructure layer must fulfil.
//!
//! # Modules
//!
//! - [`entities`] - The persisted [`entities::ShortUrl`] mapping
//! - [`owner`] - Ephemeral owner identity attached to each mapping
//! - [`repositories`] - Durable store trait definitions
//! - [`validation`] - Pure slug and URL validators
//! - [`error`] - Typed errors surfaced by the core services

pub mod entities;
pub mod error;
pub mod owner;
pub mod repositories;
pub mod validation;

pub use error::ShortenerError;
pub use owner::OwnerId;
