//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    ListingService, ResolutionService, SessionService, ShorteningService, SlugAllocator,
};
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::cache::CacheService;

/// Default length of slugs generated when the caller does not supply one.
pub const DEFAULT_SLUG_LENGTH: usize = 6;

/// Default `Max-Age` of the owner session cookie (one year).
pub const DEFAULT_SESSION_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Application state cloned into each request.
///
/// Services are stateless between calls and shared behind [`Arc`], so cloning
/// the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub slug_allocator: Arc<SlugAllocator>,
    pub shortening_service: Arc<ShorteningService>,
    pub resolution_service: Arc<ResolutionService>,
    pub listing_service: Arc<ListingService>,
    pub session_service: Arc<SessionService>,
    pub repository: Arc<dyn ShortUrlRepository>,
    pub cache: Arc<dyn CacheService>,
    pub default_slug_length: usize,
    pub session_max_age_seconds: u64,
}

impl AppState {
    /// Wires every service on top of one store and one cache.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        cache: Arc<dyn CacheService>,
        session_secret: String,
    ) -> Self {
        Self {
            slug_allocator: Arc::new(SlugAllocator::new(repository.clone())),
            shortening_service: Arc::new(ShorteningService::new(repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(
                repository.clone(),
                cache.clone(),
            )),
            listing_service: Arc::new(ListingService::new(repository.clone())),
            session_service: Arc::new(SessionService::new(session_secret)),
            repository,
            cache,
            default_slug_length: DEFAULT_SLUG_LENGTH,
            session_max_age_seconds: DEFAULT_SESSION_MAX_AGE,
        }
    }

    /// Sets the length used for slugs generated on `POST /shorten`.
    pub fn with_default_slug_length(mut self, length: usize) -> Self {
        self.default_slug_length = length;
        self
    }

    /// Rebuilds the allocator with a different retry bound.
    pub fn with_max_slug_attempts(mut self, max_attempts: usize) -> Self {
        self.slug_allocator = Arc::new(
            SlugAllocator::new(self.repository.clone()).with_max_attempts(max_attempts),
        );
        self
    }

    pub fn with_session_max_age(mut self, seconds: u64) -> Self {
        self.session_max_age_seconds = seconds;
        self
    }
}
