//! Application layer services implementing the slug engine.
//!
//! Services consume the repository and cache traits and expose the
//! operations the HTTP layer calls. They hold no mutable state of their own,
//! so a single instance behind an `Arc` serves all requests concurrently.
//!
//! # Available Services
//!
//! - [`services::SlugAllocator`] - Unique random slug generation
//! - [`services::ShorteningService`] - Validated mapping creation
//! - [`services::ResolutionService`] - Cache-aside slug resolution
//! - [`services::ListingService`] - Owner-scoped listing
//! - [`services::SessionService`] - Signed session tokens carrying an owner id

pub mod services;
