//! # Brand Analyzer
//!
//! A brand visibility analyzer API built with Axum.
//!
//! A user submits a brand name, website, and email, and receives a generated
//! visibility report: a search score, keyword list, competitor table, and
//! per-keyword search-volume distribution. Reports are persisted and can be
//! re-fetched by id.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities plus the generator and
//!   repository traits
//! - **Application Layer** ([`application`]) - Metrics generators and the
//!   submission service
//! - **Infrastructure Layer** ([`infrastructure`]) - Flat-file storage and
//!   outbound web clients
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Metrics Generators
//!
//! Two generators share one output contract, selected by `METRICS_MODE`:
//!
//! - **Deterministic** - hash-driven synthesis; same name in, same report out
//! - **Web** - website scrape plus Google Custom Search lookup, degrading to
//!   randomized fallbacks on any upstream failure
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: enable live search lookups
//! export GOOGLE_API_KEY="..."
//! export GOOGLE_SEARCH_ENGINE_ID="..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::metrics::{HashMetricsGenerator, WebMetricsGenerator};
    pub use crate::application::services::SubmissionService;
    pub use crate::domain::entities::{BrandMetrics, NewSubmission, Submission};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
