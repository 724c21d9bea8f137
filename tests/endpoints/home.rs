//! tests/endpoints/home.rs
//! GET / answers with the liveness message, every time.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

const EXPECTED: &str = "✅ Backend is running successfully!";

#[tokio::test]
async fn root_returns_liveness_message() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), EXPECTED);
}

#[tokio::test]
async fn repeated_requests_return_identical_bodies() {
    let base_url: String = common::spawn_app().await;
    let client: reqwest::Client = reqwest::Client::new();

    for _ in 0..5 {
        let resp: reqwest::Response = client
            .get(format!("{}/", base_url))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), EXPECTED);
    }
}
