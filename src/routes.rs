//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*` - REST API (submit, retrieve, list, health)
//! - anything else - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single configurable origin, or permissive wildcard
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use serde_json::json;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - permitted cross-origin source; `*` selects a
///   credential-less permissive layer, a concrete origin gets credentials
pub fn app_router(state: AppState, cors_origin: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors_layer(cors_origin))
        .layer(api::middleware::tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for unmatched routes.
async fn not_found_handler() -> AppError {
    AppError::not_found("Route not found", json!({}))
}

/// Builds the CORS layer for the configured origin.
///
/// A wildcard origin cannot carry credentials, so `*` maps to the
/// permissive credential-less layer; an unparseable origin falls back the
/// same way (config validation normally rejects it first).
fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => {
            tracing::warn!("Invalid CORS origin '{origin}', falling back to permissive");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
