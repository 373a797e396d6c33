mod common;

use common::{FlakyRepository, TestCache};
use slug_shortener::application::services::{ResolutionService, ShorteningService};
use slug_shortener::domain::error::ShortenerError;
use slug_shortener::domain::owner::OwnerId;
use std::sync::Arc;

fn services() -> (
    ShorteningService,
    ResolutionService,
    Arc<FlakyRepository>,
    Arc<TestCache>,
) {
    let repo = Arc::new(FlakyRepository::new());
    let cache = Arc::new(TestCache::new());
    (
        ShorteningService::new(repo.clone()),
        ResolutionService::new(repo.clone(), cache.clone()),
        repo,
        cache,
    )
}

#[tokio::test]
async fn test_shorten_does_not_touch_cache() {
    let (shortening, _resolution, _repo, cache) = services();

    shortening
        .shorten("abc", "https://example.com", &OwnerId::new())
        .await
        .unwrap();

    assert_eq!(cache.writes(), 0);
    assert_eq!(cache.cached("abc"), None);
}

#[tokio::test]
async fn test_cold_read_populates_cache() {
    let (shortening, resolution, repo, cache) = services();

    shortening
        .shorten("abc", "https://example.com", &OwnerId::new())
        .await
        .unwrap();

    assert_eq!(resolution.unshorten("abc").await.unwrap(), "https://example.com");
    assert_eq!(repo.lookups(), 1);
    assert_eq!(cache.cached("abc").as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_warm_read_survives_store_outage() {
    let (shortening, resolution, repo, _cache) = services();

    shortening
        .shorten("abc", "https://example.com", &OwnerId::new())
        .await
        .unwrap();
    resolution.unshorten("abc").await.unwrap();

    repo.set_unreachable(true);

    assert_eq!(resolution.unshorten("abc").await.unwrap(), "https://example.com");
    assert_eq!(repo.lookups(), 1);
}

#[tokio::test]
async fn test_cold_read_during_store_outage_fails() {
    let (shortening, resolution, repo, _cache) = services();

    shortening
        .shorten("abc", "https://example.com", &OwnerId::new())
        .await
        .unwrap();

    repo.set_unreachable(true);

    assert!(matches!(
        resolution.unshorten("abc").await,
        Err(ShortenerError::Storage(_))
    ));
}

#[tokio::test]
async fn test_cache_read_failure_falls_back_to_store() {
    let (shortening, resolution, repo, cache) = services();

    shortening
        .shorten("abc", "https://example.com", &OwnerId::new())
        .await
        .unwrap();
    resolution.unshorten("abc").await.unwrap();

    cache.fail_reads(true);

    assert_eq!(resolution.unshorten("abc").await.unwrap(), "https://example.com");
    assert_eq!(repo.lookups(), 2);
}

#[tokio::test]
async fn test_cache_write_failure_is_not_an_error() {
    let (shortening, resolution, _repo, cache) = services();

    shortening
        .shorten("abc", "https://example.com", &OwnerId::new())
        .await
        .unwrap();

    cache.fail_writes(true);

    assert_eq!(resolution.unshorten("abc").await.unwrap(), "https://example.com");
    assert_eq!(cache.writes(), 1);
    assert_eq!(cache.cached("abc"), None);
}

#[tokio::test]
async fn test_unknown_slug_is_not_cached() {
    let (_shortening, resolution, _repo, cache) = services();

    for _ in 0..2 {
        assert_eq!(
            resolution.unshorten("missing").await,
            Err(ShortenerError::Unshorten("missing".to_string()))
        );
    }

    assert_eq!(cache.writes(), 0);
}

#[tokio::test]
async fn test_malformed_slug_does_not_reach_store() {
    let (_shortening, resolution, repo, cache) = services();

    repo.set_unreachable(true);

    assert_eq!(
        resolution.unshorten("a\0b").await,
        Err(ShortenerError::Unshorten("a\0b".to_string()))
    );
    assert_eq!(repo.lookups(), 0);
    assert_eq!(cache.reads(), 0);
}

#[tokio::test]
async fn test_malformed_slug_rejected_before_store_on_shorten() {
    let (shortening, _resolution, repo, _cache) = services();

    repo.set_unreachable(true);

    assert!(matches!(
        shortening
            .shorten("a\0b", "https://example.com", &OwnerId::new())
            .await,
        Err(ShortenerError::InvalidInput { .. })
    ));
}
