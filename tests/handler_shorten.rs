mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::json;
use slug_shortener::domain::owner::OwnerId;
use slug_shortener::domain::repositories::ShortUrlRepository;

#[tokio::test]
async fn test_shorten_with_custom_slug_json() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/some/page", "slug": "my-link" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "my-link");
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );

    let stored = repo.find_by_slug("my-link").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://example.com/some/page");
}

#[tokio::test]
async fn test_shorten_with_form_body() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com"), ("slug", "from_form")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "from_form");
    assert!(repo.exists("from_form").await.unwrap());
}

#[tokio::test]
async fn test_shorten_generates_slug_of_default_length() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let slug = response.text();
    assert_eq!(slug.len(), 6);
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(repo.exists(&slug).await.unwrap());
}

#[tokio::test]
async fn test_shorten_respects_configured_default_length() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state.with_default_slug_length(10));

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text().len(), 10);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "slug": "abc" }))
        .await;

    response.assert_status_bad_request();
    assert!(!repo.exists("abc").await.unwrap());
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_duplicate_slug() {
    let (state, repo) = common::create_test_state();
    common::create_test_short_url(repo.as_ref(), "taken", "https://one.com", OwnerId::new())
        .await;
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://two.com", "slug": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.text(), "This slug is already occupied.");

    let stored = repo.find_by_slug("taken").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://one.com");
}

#[tokio::test]
async fn test_shorten_invalid_slug() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "slug": "a b" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().starts_with("Invalid slug"));
}

#[tokio::test]
async fn test_shorten_reserved_slug() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "slug": "health" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not a url", "slug": "abc" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().starts_with("Invalid url"));
}

#[tokio::test]
async fn test_shorten_sets_session_cookie_once() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let set_cookie = response.headers()["set-cookie"].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("owner="));
    assert!(set_cookie.contains("HttpOnly"));

    let cookie = common::cookie_from_response(&response);

    let response = server
        .post("/shorten")
        .add_header("Cookie", cookie)
        .json(&json!({ "url": "https://example.org" }))
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_shorten_binds_mapping_to_session_owner() {
    let (state, repo) = common::create_test_state();
    let owner = OwnerId::new();
    let cookie = common::session_cookie_for(&state, &owner);
    let server = common::create_test_server(state);

    server
        .post("/shorten")
        .add_header("Cookie", cookie)
        .json(&json!({ "url": "https://example.com", "slug": "mine" }))
        .await
        .assert_status_ok();

    let stored = repo.find_by_slug("mine").await.unwrap().unwrap();
    assert_eq!(stored.owner_id, owner);
}

#[tokio::test]
async fn test_shorten_with_forged_cookie_gets_new_session() {
    let (state, repo) = common::create_test_state();
    let victim = OwnerId::new();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .add_header("Cookie", format!("owner={victim}.deadbeef"))
        .json(&json!({ "url": "https://example.com", "slug": "forged" }))
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("set-cookie").is_some());

    let stored = repo.find_by_slug("forged").await.unwrap().unwrap();
    assert_ne!(stored.owner_id, victim);
}

#[tokio::test]
async fn test_shorten_url_with_newline_rejected() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/a\nb", "slug": "nl" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().starts_with("Invalid url"));
    assert!(!repo.exists("nl").await.unwrap());

    server.get("/nl").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_url_repaired_by_parser_rejected() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    for url in ["http:x.com", " http://x.com ", "https:/\\evil.com", "http://x.com\\y"] {
        server
            .post("/shorten")
            .json(&json!({ "url": url }))
            .await
            .assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_shorten_slug_with_nul_byte_rejected() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com"), ("slug", "a\0b")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().starts_with("Invalid slug"));
    assert_eq!(repo.count().await.unwrap(), 0);
}
