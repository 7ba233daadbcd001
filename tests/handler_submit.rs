mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use brand_analyzer::api::handlers::submit_handler;
use serde_json::json;

fn test_server() -> TestServer {
    let app = Router::new()
        .route("/api/submit", post(submit_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_submit_success_returns_full_record() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "Acme",
            "brandWebsite": "https://acme.example",
            "email": "Owner@Acme.Example"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_string());
    assert_eq!(body["brandName"], "Acme");
    assert_eq!(body["brandWebsite"], "https://acme.example");
    assert_eq!(body["email"], "owner@acme.example");
    assert!(body["submittedAt"].is_string());
}

#[tokio::test]
async fn test_submit_metrics_shape() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "TestBrand",
            "brandWebsite": "https://testbrand.example",
            "email": "a@testbrand.example"
        }))
        .await;

    response.assert_status_ok();

    let metrics = &response.json::<serde_json::Value>()["metrics"];

    let score = metrics["searchScore"].as_u64().unwrap();
    assert!((40..=100).contains(&score));

    let volume = metrics["monthlySearchVolume"].as_u64().unwrap();
    assert!((1000..=500_000).contains(&volume));

    let keywords = metrics["topKeywords"].as_array().unwrap();
    assert!((5..=8).contains(&keywords.len()));

    let volumes = metrics["keywordVolumes"].as_array().unwrap();
    assert_eq!(volumes.len(), keywords.len());

    let distributed: u64 = volumes
        .iter()
        .map(|kv| kv["volume"].as_u64().unwrap())
        .sum();
    assert_eq!(distributed, volume);

    let competitors = metrics["competitorAnalysis"].as_array().unwrap();
    assert!((3..=5).contains(&competitors.len()));

    assert!(matches!(
        metrics["competitorLevel"].as_str().unwrap(),
        "Low" | "Medium" | "High"
    ));
}

#[tokio::test]
async fn test_submit_same_brand_yields_same_metrics() {
    let server = test_server();

    let payload = json!({
        "brandName": "TestBrand",
        "brandWebsite": "https://testbrand.example",
        "email": "a@testbrand.example"
    });

    let first = server.post("/api/submit").json(&payload).await;
    let second = server.post("/api/submit").json(&payload).await;

    assert_eq!(
        first.json::<serde_json::Value>()["metrics"],
        second.json::<serde_json::Value>()["metrics"]
    );
}

#[tokio::test]
async fn test_submit_trims_fields() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "  Padded Brand  ",
            "brandWebsite": "  https://padded.example  ",
            "email": "  a@padded.example  "
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["brandName"], "Padded Brand");
    assert_eq!(body["brandWebsite"], "https://padded.example");
    assert_eq!(body["email"], "a@padded.example");
}

#[tokio::test]
async fn test_submit_empty_brand_name_rejected() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "",
            "brandWebsite": "https://acme.example",
            "email": "a@acme.example"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(
        body["error"]["details"]["brandName"],
        "Brand name is required"
    );
}

#[tokio::test]
async fn test_submit_invalid_website_rejected() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "Acme",
            "brandWebsite": "not-a-url",
            "email": "a@acme.example"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["error"]["details"]["brandWebsite"],
        "Brand website must be a valid URL (http:// or https://)"
    );
}

#[tokio::test]
async fn test_submit_invalid_email_rejected() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "Acme",
            "brandWebsite": "https://acme.example",
            "email": "not-an-email"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["error"]["details"]["email"],
        "Email must be a valid email address"
    );
}

#[tokio::test]
async fn test_submit_reports_all_invalid_fields() {
    let server = test_server();

    let response = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "x",
            "brandWebsite": "nope",
            "email": "nope"
        }))
        .await;

    response.assert_status_bad_request();

    let details = &response.json::<serde_json::Value>()["error"]["details"];
    assert!(details.get("brandName").is_some());
    assert!(details.get("brandWebsite").is_some());
    assert!(details.get("email").is_some());
}

#[tokio::test]
async fn test_submit_missing_fields_rejected() {
    let server = test_server();

    let response = server.post("/api/submit").json(&json!({})).await;

    response.assert_status_bad_request();

    let details = &response.json::<serde_json::Value>()["error"]["details"];
    assert_eq!(details["brandName"], "Brand name is required");
    assert_eq!(details["brandWebsite"], "Brand website is required");
    assert_eq!(details["email"], "Email is required");
}
