//! Business logic services for the application layer.

pub mod listing_service;
pub mod resolution_service;
pub mod session_service;
pub mod shortening_service;
pub mod slug_allocator;

pub use listing_service::ListingService;
pub use resolution_service::ResolutionService;
pub use session_service::SessionService;
pub use shortening_service::ShorteningService;
pub use slug_allocator::SlugAllocator;
