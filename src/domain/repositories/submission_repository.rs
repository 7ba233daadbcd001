//! Repository contract for submission persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Submission;
use crate::error::AppError;

/// Storage interface for the submission collection.
///
/// Submissions are immutable once stored, so the contract deliberately has
/// no update or delete operations.
///
/// # Implementations
///
/// - [`JsonFileRepository`](crate::infrastructure::persistence::JsonFileRepository) - flat JSON file
/// - [`InMemoryRepository`](crate::infrastructure::persistence::InMemoryRepository) - tests and ephemeral runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Appends a submission to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the record cannot be persisted.
    async fn store(&self, submission: Submission) -> Result<(), AppError>;

    /// Looks up a submission by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(submission))` if found
    /// - `Ok(None)` if no record matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, AppError>;

    /// Lists every stored submission in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    async fn list_all(&self) -> Result<Vec<Submission>, AppError>;
}
