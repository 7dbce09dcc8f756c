mod support;

use serde_json::{Value, json};
use support::TestServer;

async fn post_refresh(
    server: &TestServer,
    client: &reqwest::Client,
    payload: Value,
) -> reqwest::Response {
    client
        .post(server.refresh_url())
        .header("x-qr-nonce", server.nonce)
        .json(&payload)
        .send()
        .await
        .expect("request should succeed")
}

#[tokio::test]
async fn test_refresh_returns_data_uri_image() {
    let server = support::spawn_server().await;
    let client = reqwest::Client::new();

    let res = post_refresh(&server, &client, json!({ "url": "https://example.com" })).await;

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["success"], true);
    let html = body["data"].as_str().expect("data should be a string");
    assert!(html.starts_with(r#"<img src="data:image/png;base64,"#));
    assert!(html.contains(r#"width="200" height="200""#));
}

#[tokio::test]
async fn test_refresh_rejects_data_scheme() {
    let server = support::spawn_server().await;
    let client = reqwest::Client::new();

    let res = post_refresh(&server, &client, json!({ "url": "data:text/html,<script>alert(1)</script>" })).await;

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_refresh_without_nonce_is_forbidden() {
    let server = support::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.refresh_url())
        .json(&json!({ "url": "https://example.com" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["data"], "Security check failed.");
}

#[tokio::test]
async fn test_concurrent_refreshes_do_not_interfere() {
    let server = support::spawn_server().await;
    let client = reqwest::Client::new();
    let urls: Vec<String> = (0..8)
        .map(|i| format!("https://example.com/item/{i}"))
        .collect();

    let concurrent = refresh_all(&server, &client, &urls).await;

    // Sequential renders of the same inputs must match byte for byte.
    for (url, html) in urls.iter().zip(&concurrent) {
        let res = post_refresh(&server, &client, json!({ "url": url })).await;
        let body: Value = res.json().await.expect("json body");
        assert_eq!(body["data"].as_str(), Some(html.as_str()), "mismatch for {url}");
    }

    let mut distinct = concurrent.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), urls.len());
}

async fn refresh_all(server: &TestServer, client: &reqwest::Client, urls: &[String]) -> Vec<String> {
    let handles: Vec<_> = urls
        .iter()
        .map(|url| {
            let request = client
                .post(server.refresh_url())
                .header("x-qr-nonce", server.nonce)
                .json(&json!({ "url": url }));
            tokio::spawn(async move {
                let res = request.send().await.expect("request should succeed");
                let body: Value = res.json().await.expect("json body");
                body["data"].as_str().expect("data string").to_string()
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.expect("task should not panic"));
    }
    results
}
