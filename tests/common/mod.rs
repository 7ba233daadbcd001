#![allow(dead_code)]

use std::sync::Arc;

use brand_analyzer::application::metrics::HashMetricsGenerator;
use brand_analyzer::application::services::SubmissionService;
use brand_analyzer::domain::entities::{NewSubmission, Submission};
use brand_analyzer::infrastructure::persistence::InMemoryRepository;
use brand_analyzer::state::AppState;

/// Builds handler-test state over an in-memory store and the deterministic
/// generator, so responses are reproducible without any network.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryRepository::new());
    let generator = Arc::new(HashMetricsGenerator::new());
    let service = Arc::new(SubmissionService::new(repository, generator));

    AppState::new(service)
}

/// Stores a submission for the given brand and returns the record.
pub async fn create_test_submission(state: &AppState, brand_name: &str) -> Submission {
    state
        .submission_service
        .submit(NewSubmission {
            brand_name: brand_name.to_string(),
            brand_website: format!("https://{}.example", brand_name.to_lowercase()),
            email: format!("owner@{}.example", brand_name.to_lowercase()),
        })
        .await
        .unwrap()
}
