mod common;

use common::TestApp;
use reqwest::Client;

// The liveness route never talks to the provider, so these tests point the
// client at an address nothing listens on.
const NO_PROVIDER: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(NO_PROVIDER).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "✅ Order gateway is running!");
}

#[tokio::test]
async fn preflight_returns_no_content() {
    let app = TestApp::spawn(NO_PROVIDER).await;
    let client = Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/create-order", app.address),
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn preflight_ignores_request_body() {
    let app = TestApp::spawn(NO_PROVIDER).await;
    let client = Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/create-order", app.address),
        )
        .body("not even json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
}
