//! Flat-file JSON implementation of the submission repository.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::Submission;
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

/// Failure inside the flat-file store. Mapped to a generic storage error at
/// the API boundary; the cause only reaches the logs.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed storage file: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        tracing::error!("Storage failure: {e}");
        AppError::internal("Storage error", serde_json::json!({}))
    }
}

/// Repository persisting submissions as one pretty-printed JSON array.
///
/// The whole array is rewritten on every store. Writers are serialized
/// behind a mutex so concurrent stores cannot clobber each other's
/// read-modify-write cycle; the on-disk format stays a plain ordered array.
pub struct JsonFileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    /// Opens the store, creating the parent directory and an empty file on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the directory or file cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        if !fs::try_exists(&path).await? {
            write_submissions(&path, &[]).await?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    async fn read_all(&self) -> Result<Vec<Submission>, StorageError> {
        let data = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }
}

async fn write_submissions(path: &Path, submissions: &[Submission]) -> Result<(), StorageError> {
    let data = serde_json::to_string_pretty(submissions)?;
    fs::write(path, data).await?;
    Ok(())
}

#[async_trait]
impl SubmissionRepository for JsonFileRepository {
    async fn store(&self, submission: Submission) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut submissions = self.read_all().await?;
        submissions.push(submission);
        write_submissions(&self.path, &submissions).await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, AppError> {
        let submissions = self.read_all().await?;
        Ok(submissions.into_iter().find(|s| s.id == id))
    }

    async fn list_all(&self) -> Result<Vec<Submission>, AppError> {
        Ok(self.read_all().await?)
    }
}
