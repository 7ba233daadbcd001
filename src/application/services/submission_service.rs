//! Submission orchestration service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::MetricsGenerator;
use crate::domain::entities::{NewSubmission, Submission};
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

/// Service tying the metrics generator to the submission store.
///
/// A submission either fully succeeds (metrics generated, record stored) or
/// fully fails; there is no partial state to clean up.
pub struct SubmissionService {
    repository: Arc<dyn SubmissionRepository>,
    generator: Arc<dyn MetricsGenerator>,
}

impl SubmissionService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        generator: Arc<dyn MetricsGenerator>,
    ) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Generates a report for the input and persists the combined record.
    ///
    /// The generator never fails; the raw brand name and website are handed
    /// to it as submitted, while the stored record carries the normalized
    /// forms.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the record cannot be persisted.
    pub async fn submit(&self, input: NewSubmission) -> Result<Submission, AppError> {
        tracing::info!("Processing submission for: {}", input.brand_name.trim());

        let metrics = self
            .generator
            .generate(&input.brand_name, &input.brand_website)
            .await;

        let submission = Submission::new(input, metrics);
        self.repository.store(submission.clone()).await?;

        tracing::info!("Submission saved with id: {}", submission.id);
        Ok(submission)
    }

    /// Retrieves a submission by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches,
    /// [`AppError::Internal`] if the store cannot be read.
    pub async fn get_submission(&self, id: Uuid) -> Result<Submission, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Submission not found", json!({ "id": id })))
    }

    /// Lists every stored submission in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn list_submissions(&self) -> Result<Vec<Submission>, AppError> {
        self.repository.list_all().await
    }
}
