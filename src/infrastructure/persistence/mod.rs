//! Submission repository implementations.
//!
//! # Repositories
//!
//! - [`JsonFileRepository`] - Ordered JSON array in a single file, rewritten
//!   whole on every store
//! - [`InMemoryRepository`] - Process-local storage for tests and ephemeral
//!   runs

pub mod json_file_repository;
pub mod memory_repository;

pub use json_file_repository::{JsonFileRepository, StorageError};
pub use memory_repository::InMemoryRepository;
