//! Random candidate slug generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Source of candidate slugs for the allocator.
///
/// Candidates need not be unique; the allocator checks occupancy and asks
/// again on collision.
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Returns a candidate slug of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Draws each character uniformly from the 62-symbol alphabet `[A-Za-z0-9]`.
///
/// Uses the thread-local RNG; slugs are identifiers, not secrets.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericGenerator;

impl SlugGenerator for AlphanumericGenerator {
    fn generate(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
