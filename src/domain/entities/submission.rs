//! Submission entity combining user input with a generated report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::metrics::BrandMetrics;

/// A persisted brand submission. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub brand_name: String,
    pub brand_website: String,
    pub email: String,
    pub metrics: BrandMetrics,
    pub submitted_at: DateTime<Utc>,
}

/// Validated input for creating a submission, before normalization.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub brand_name: String,
    pub brand_website: String,
    pub email: String,
}

impl Submission {
    /// Builds a record from validated input and a generated report.
    ///
    /// Assigns a fresh v4 id and the current UTC timestamp. The brand name
    /// and website are stored trimmed, the email trimmed and lowercased.
    pub fn new(input: NewSubmission, metrics: BrandMetrics) -> Self {
        Self {
            id: Uuid::new_v4(),
            brand_name: input.brand_name.trim().to_string(),
            brand_website: input.brand_website.trim().to_string(),
            email: input.email.trim().to_lowercase(),
            metrics,
            submitted_at: Utc::now(),
        }
    }
}
