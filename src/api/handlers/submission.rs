//! Handlers for submission retrieval endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::Submission;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves a stored submission by id.
///
/// # Endpoint
///
/// `GET /api/submission/{id}`
///
/// Identifiers are opaque to clients: a malformed id is indistinguishable
/// from an unknown one and yields the same 404.
///
/// # Errors
///
/// Returns 404 Not Found if no record matches.
pub async fn submission_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Submission>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::not_found("Submission not found", json!({ "id": id })))?;

    let submission = state.submission_service.get_submission(id).await?;
    Ok(Json(submission))
}

/// Lists every stored submission in insertion order.
///
/// # Endpoint
///
/// `GET /api/submissions`
///
/// Intended for administrative use; there is no pagination because the
/// flat-file store is read whole anyway.
pub async fn submission_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.submission_service.list_submissions().await?;
    Ok(Json(submissions))
}
