//! tests/endpoints/hello.rs
//! GET /api/hello answers with the greeting.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn hello_returns_greeting() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type: String = resp.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/plain"));

    assert_eq!(resp.text().await.unwrap(), "Hello from Event Management API!");
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let base_url: String = common::spawn_app().await;
    let client: reqwest::Client = reqwest::Client::new();

    let handles: Vec<tokio::task::JoinHandle<String>> = (0..8)
        .map(|_| {
            let client: reqwest::Client = client.clone();
            let url: String = format!("{}/api/hello", base_url);
            tokio::spawn(async move {
                client.get(url).send().await.unwrap().text().await.unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "Hello from Event Management API!");
    }
}
