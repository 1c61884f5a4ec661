mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

async fn post_estimate(app: &TestApp, body: serde_json::Value) -> reqwest::Response {
    Client::new()
        .post(format!("{}/api/estimate", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

async fn estimated_total(app: &TestApp, body: serde_json::Value) -> f64 {
    let response = post_estimate(app, body).await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["estimated_total"]
        .as_f64()
        .expect("estimated_total missing")
}

#[tokio::test]
async fn shikai_tier_doubles_box_price() {
    let app = TestApp::spawn().await;

    let total = estimated_total(
        &app,
        json!({ "box_price": 100.0, "tier": "shikai", "addons": [] }),
    )
    .await;

    assert_eq!(total, 200.0);
}

#[tokio::test]
async fn tier_is_case_insensitive() {
    let app = TestApp::spawn().await;

    for tier in ["Shikai", "SHIKAI", "shikai"] {
        let total = estimated_total(
            &app,
            json!({ "box_price": 100.0, "tier": tier, "addons": [] }),
        )
        .await;
        assert_eq!(total, 200.0, "tier {}", tier);
    }
}

#[tokio::test]
async fn addon_surcharges_are_applied() {
    let app = TestApp::spawn().await;

    let total = estimated_total(
        &app,
        json!({ "box_price": 100.0, "tier": "bankai", "addons": ["OSL Effects"] }),
    )
    .await;

    assert_eq!(total, 420.0);
}

#[tokio::test]
async fn duplicate_addons_are_counted_per_occurrence() {
    let app = TestApp::spawn().await;

    let total = estimated_total(
        &app,
        json!({
            "box_price": 50.0,
            "tier": "shikai",
            "addons": ["Magnetization", "Magnetization"]
        }),
    )
    .await;

    assert_eq!(total, 110.0);
}

#[tokio::test]
async fn unknown_addons_contribute_nothing() {
    let app = TestApp::spawn().await;

    let total = estimated_total(
        &app,
        json!({ "box_price": 100.0, "tier": "shikai", "addons": ["Nonexistent Addon"] }),
    )
    .await;

    assert_eq!(total, 200.0);
}

#[tokio::test]
async fn addons_field_is_optional() {
    let app = TestApp::spawn().await;

    let total = estimated_total(&app, json!({ "box_price": 25.0, "tier": "bankai" })).await;

    assert_eq!(total, 100.0);
}

#[tokio::test]
async fn repeated_requests_yield_identical_totals() {
    let app = TestApp::spawn().await;
    let body = json!({
        "box_price": 73.5,
        "tier": "bankai",
        "addons": ["Magnetization", "OSL Effects"]
    });

    let first = estimated_total(&app, body.clone()).await;
    let second = estimated_total(&app, body).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = TestApp::spawn().await;

    let response = Client::new()
        .post(format!("{}/api/estimate", app.address))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn missing_tier_is_rejected() {
    let app = TestApp::spawn().await;

    let response = post_estimate(&app, json!({ "box_price": 100.0 })).await;

    assert!(response.status().is_client_error());
}
