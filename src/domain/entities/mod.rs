//! Domain entities.

pub mod metrics;
pub mod submission;

pub use metrics::{BrandMetrics, Competitor, CompetitorLevel, KeywordVolume};
pub use submission::{NewSubmission, Submission};
