//! Unique random slug allocation.

use std::sync::Arc;

use crate::domain::error::ShortenerError;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::validation::{MAX_SLUG_LENGTH, is_reserved_slug};
use crate::utils::slug_generator::{AlphanumericGenerator, SlugGenerator};

/// Default number of candidates drawn before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Number of symbols a random slug character is drawn from.
const ALPHABET_SIZE: usize = 62;

/// Spaces no larger than this get a bound scaled to their size.
const SMALL_SLUG_SPACE: usize = ALPHABET_SIZE;

/// Draws per slug in a small space before it is reported as exhausted.
const SMALL_SPACE_DRAWS_PER_SLUG: usize = 4;

/// Generates random slugs that are free at the time of the check.
///
/// The allocator does not reserve anything: two concurrent callers may be
/// handed the same candidate. The store's primary key decides at insert time.
pub struct SlugAllocator {
    repository: Arc<dyn ShortUrlRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: usize,
}

impl SlugAllocator {
    /// Creates an allocator drawing from the 62-symbol alphanumeric alphabet.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self::with_generator(repository, Arc::new(AlphanumericGenerator))
    }

    /// Creates an allocator with a custom candidate source.
    pub fn with_generator(
        repository: Arc<dyn ShortUrlRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the retry bound. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Retry bound for `length`.
    ///
    /// A flat bound gives up on a one-character space while many slugs are
    /// still free, so small spaces are drawn from several times their size.
    pub fn attempts_for(&self, length: usize) -> usize {
        match slug_space_size(length) {
            Some(space) if space <= SMALL_SLUG_SPACE => self
                .max_attempts
                .max(space * SMALL_SPACE_DRAWS_PER_SLUG),
            _ => self.max_attempts,
        }
    }

    /// Returns a slug of `length` characters not currently present in the store.
    ///
    /// Candidates that are occupied or collide with a reserved route name are
    /// discarded and redrawn, at most [`Self::attempts_for`] times in total.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::InvalidLength`] if `length` is 0 or exceeds
    /// [`MAX_SLUG_LENGTH`].
    /// Returns [`ShortenerError::SlugSpaceExhausted`] if every attempt collided.
    /// Returns [`ShortenerError::Storage`] if the occupancy check fails.
    pub async fn generate_unique_slug(&self, length: usize) -> Result<String, ShortenerError> {
        if length == 0 || length > MAX_SLUG_LENGTH {
            return Err(ShortenerError::InvalidLength(length));
        }

        for _ in 0..self.attempts_for(length) {
            let candidate = self.generator.generate(length);

            if !is_reserved_slug(&candidate) && !self.repository.exists(&candidate).await? {
                return Ok(candidate);
            }

            metrics::counter!("slug_allocation_collisions_total").increment(1);
        }

        Err(ShortenerError::SlugSpaceExhausted { length })
    }
}

/// Number of distinct slugs of `length`, or `None` if it overflows `usize`.
fn slug_space_size(length: usize) -> Option<usize> {
    u32::try_from(length)
        .ok()
        .and_then(|exp| ALPHABET_SIZE.checked_pow(exp))
}
