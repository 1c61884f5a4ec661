mod common;

use common::TestApp;
use reqwest::multipart::Form;
use reqwest::Client;

async fn get_diagnostics(app: &TestApp) -> serde_json::Value {
    let response = Client::new()
        .get(format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Diagnostics are best-effort and never fail the request.
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse JSON")
}

#[tokio::test]
async fn degraded_store_is_reported_not_raised() {
    let app = TestApp::spawn().await;

    let body = get_diagnostics(&app).await;

    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "not available");
    assert_eq!(body["connection_status"], "not connected");
    assert!(body["collections"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn connected_store_lists_collections() {
    let app = TestApp::spawn_with_store(true).await;

    // Seed a collection through the public API.
    let form = Form::new()
        .text("name", "Rukia K.")
        .text("email", "rukia@example.com")
        .text("description", "Squad banner commission.");
    let response = Client::new()
        .post(format!("{}/api/contact", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());

    let body = get_diagnostics(&app).await;

    assert_eq!(body["database"], "connected");
    assert_eq!(body["connection_status"], "connected");
    let collections = body["collections"].as_array().expect("array");
    assert!(collections.iter().any(|c| c == "contactrequest"));
}

#[tokio::test]
async fn store_errors_become_string_fields() {
    let app = TestApp::spawn_with_store(false).await;

    let body = get_diagnostics(&app).await;

    let database = body["database"].as_str().expect("string field");
    assert!(database.starts_with("error:"), "got {}", database);
    assert_eq!(body["connection_status"], "error");
}
