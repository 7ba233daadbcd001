mod common;

use axum::Router;
use axum_test::TestServer;
use brand_analyzer::api;
use brand_analyzer::error::AppError;
use serde_json::json;

async fn not_found_fallback() -> AppError {
    AppError::not_found("Route not found", json!({}))
}

fn full_app() -> TestServer {
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .fallback(not_found_fallback)
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = full_app();

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Route not found");
}

#[tokio::test]
async fn test_submit_then_retrieve_through_router() {
    let server = full_app();

    let submitted = server
        .post("/api/submit")
        .json(&json!({
            "brandName": "RouterBrand",
            "brandWebsite": "https://routerbrand.example",
            "email": "a@routerbrand.example"
        }))
        .await;
    submitted.assert_status_ok();

    let id = submitted.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let fetched = server.get(&format!("/api/submission/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(
        fetched.json::<serde_json::Value>(),
        submitted.json::<serde_json::Value>()
    );
}

#[tokio::test]
async fn test_health_through_router() {
    let server = full_app();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}
