//! In-memory implementation of the submission repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Submission;
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

/// Repository holding submissions in process memory.
///
/// Used by tests and ephemeral runs; nothing survives a restart.
#[derive(Default)]
pub struct InMemoryRepository {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryRepository {
    async fn store(&self, submission: Submission) -> Result<(), AppError> {
        self.submissions.write().await.push(submission);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, AppError> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().find(|s| s.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Submission>, AppError> {
        Ok(self.submissions.read().await.clone())
    }
}
