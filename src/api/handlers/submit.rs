//! Handler for brand submission endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::submit::SubmitRequest;
use crate::domain::entities::{NewSubmission, Submission};
use crate::error::AppError;
use crate::state::AppState;

/// Analyzes a brand and stores the resulting report.
///
/// # Endpoint
///
/// `POST /api/submit`
///
/// # Request Body
///
/// ```json
/// {
///   "brandName": "Acme",
///   "brandWebsite": "https://acme.example",
///   "email": "owner@acme.example"
/// }
/// ```
///
/// # Response
///
/// The full stored record, including the assigned id and generated metrics:
///
/// ```json
/// {
///   "id": "4a0e…",
///   "brandName": "Acme",
///   "brandWebsite": "https://acme.example",
///   "email": "owner@acme.example",
///   "metrics": { "searchScore": 78, "topKeywords": ["acme", …], … },
///   "submittedAt": "2026-08-26T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a per-field message map if validation
/// fails; metrics generation never runs for an invalid request.
/// Returns 500 Internal Server Error if the record cannot be persisted.
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<Submission>, AppError> {
    payload.validate()?;

    let submission = state
        .submission_service
        .submit(NewSubmission {
            brand_name: payload.brand_name,
            brand_website: payload.brand_website,
            email: payload.email,
        })
        .await?;

    Ok(Json(submission))
}
