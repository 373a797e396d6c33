mod common;

use serde_json::json;
use slug_shortener::api::dto::listing::UrlItem;
use slug_shortener::domain::owner::OwnerId;

#[tokio::test]
async fn test_urls_without_session_is_empty() {
    let (state, repo) = common::create_test_state();
    common::create_test_short_url(repo.as_ref(), "abc", "https://example.com", OwnerId::new())
        .await;
    let server = common::create_test_server(state);

    let response = server.get("/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_urls_lists_only_own_mappings_in_creation_order() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://first.com", "slug": "first" }))
        .await;
    response.assert_status_ok();
    let cookie = common::cookie_from_response(&response);

    server
        .post("/shorten")
        .add_header("Cookie", cookie.clone())
        .json(&json!({ "url": "https://second.com", "slug": "second" }))
        .await
        .assert_status_ok();

    // Someone else's mapping
    server
        .post("/shorten")
        .json(&json!({ "url": "https://other.com", "slug": "other" }))
        .await
        .assert_status_ok();

    let response = server.get("/urls").add_header("Cookie", cookie).await;

    response.assert_status_ok();
    let items = response.json::<Vec<UrlItem>>();
    assert_eq!(
        items,
        vec![
            UrlItem {
                slug: "first".to_string(),
                url: "https://first.com".to_string(),
            },
            UrlItem {
                slug: "second".to_string(),
                url: "https://second.com".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_urls_pagination() {
    let (state, repo) = common::create_test_state();
    let owner = OwnerId::new();
    let cookie = common::session_cookie_for(&state, &owner);

    for i in 0..60 {
        common::create_test_short_url(
            repo.as_ref(),
            &format!("s{i:02}"),
            "https://example.com",
            owner,
        )
        .await;
    }
    let server = common::create_test_server(state);

    let all = server
        .get("/urls")
        .add_header("Cookie", cookie.clone())
        .await
        .json::<Vec<UrlItem>>();
    assert_eq!(all.len(), 60);

    let first = server
        .get("/urls?page=1")
        .add_header("Cookie", cookie.clone())
        .await
        .json::<Vec<UrlItem>>();
    assert_eq!(first.len(), 50);

    let second = server
        .get("/urls?page=2")
        .add_header("Cookie", cookie)
        .await
        .json::<Vec<UrlItem>>();
    assert_eq!(second.len(), 10);
}

#[tokio::test]
async fn test_urls_invalid_page() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    server.get("/urls?page=0").await.assert_status_bad_request();
    server.get("/urls?page=abc").await.assert_status_bad_request();
}
