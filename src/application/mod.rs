//! Application layer implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating generators,
//! repository calls, and business rules. Services consume domain traits and
//! provide a clean API for HTTP handlers.
//!
//! # Modules
//!
//! - [`metrics`] - The two metrics generators and their shared volume split
//! - [`services`] - Services coordinating generators and repositories

pub mod metrics;
pub mod services;
