//! API route configuration.

use crate::api::handlers::{
    health_handler, submission_handler, submission_list_handler, submit_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /submit`            - Analyze a brand and store the report
/// - `GET  /submission/{id}`   - Retrieve a stored submission
/// - `GET  /submissions`       - List all submissions (admin usage)
/// - `GET  /health`            - Liveness probe
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit_handler))
        .route("/submission/{id}", get(submission_handler))
        .route("/submissions", get(submission_list_handler))
        .route("/health", get(health_handler))
}
