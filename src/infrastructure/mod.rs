//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound web calls.
//!
//! # Modules
//!
//! - [`persistence`] - Flat-file and in-memory repository implementations
//! - [`web`] - Website fetching and search API clients

pub mod persistence;
pub mod web;
