#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::{TestResponse, TestServer};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use slug_shortener::api::routes::public_routes;
use slug_shortener::domain::entities::{NewShortUrl, ShortUrl};
use slug_shortener::domain::error::ShortenerError;
use slug_shortener::domain::owner::OwnerId;
use slug_shortener::domain::repositories::{Page, ShortUrlRepository};
use slug_shortener::infrastructure::cache::{CacheError, CacheResult, CacheService, NullCache};
use slug_shortener::infrastructure::persistence::InMemoryShortUrlRepository;
use slug_shortener::state::AppState;

pub const TEST_SESSION_SECRET: &str = "test-session-secret";

/// State over an empty in-memory store without caching.
pub fn create_test_state() -> (AppState, Arc<InMemoryShortUrlRepository>) {
    let repo = Arc::new(InMemoryShortUrlRepository::new());
    let state = AppState::new(
        repo.clone(),
        Arc::new(NullCache::new()),
        TEST_SESSION_SECRET.to_string(),
    );
    (state, repo)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(public_routes().with_state(state)).unwrap()
}

pub async fn create_test_short_url(
    repo: &dyn ShortUrlRepository,
    slug: &str,
    url: &str,
    owner: OwnerId,
) -> ShortUrl {
    repo.insert(NewShortUrl {
        slug: slug.to_string(),
        url: url.to_string(),
        owner_id: owner,
        created_at: Utc::now(),
    })
    .await
    .unwrap()
}

/// `Cookie` header value carrying a valid session for `owner`.
pub fn session_cookie_for(state: &AppState, owner: &OwnerId) -> String {
    format!("owner={}", state.session_service.issue(owner))
}

/// Turns the `Set-Cookie` of a response into a `Cookie` header value.
pub fn cookie_from_response(response: &TestResponse) -> String {
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("response should set a session cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

/// In-process cache recording every call, with switchable failures.
#[derive(Default)]
pub struct TestCache {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl TestCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn cached(&self, slug: &str) -> Option<String> {
        self.entries.lock().unwrap().get(slug).cloned()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheService for TestCache {
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("cache down".to_string()));
        }
        Ok(self.cached(slug))
    }

    async fn set_url(&self, slug: &str, url: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("cache down".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(slug.to_string(), url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.fail_reads.load(Ordering::SeqCst)
    }
}

/// Store wrapper that can be switched to fail every call.
#[derive(Default)]
pub struct FlakyRepository {
    inner: InMemoryShortUrlRepository,
    unreachable: AtomicBool,
    lookups: AtomicUsize,
}

impl FlakyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Number of `find_by_slug` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ShortenerError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(ShortenerError::Storage("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ShortUrlRepository for FlakyRepository {
    async fn exists(&self, slug: &str) -> Result<bool, ShortenerError> {
        self.check()?;
        self.inner.exists(slug).await
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, ShortenerError> {
        self.check()?;
        self.inner.insert(new_short_url).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, ShortenerError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_by_slug(slug).await
    }

    async fn list_by_owner(
        &self,
        owner: &OwnerId,
        page: Option<Page>,
    ) -> Result<Vec<ShortUrl>, ShortenerError> {
        self.check()?;
        self.inner.list_by_owner(owner, page).await
    }

    async fn count(&self) -> Result<i64, ShortenerError> {
        self.check()?;
        self.inner.count().await
    }
}
