//! Repository traits abstracting the persistence layer.

pub mod submission_repository;

pub use submission_repository::SubmissionRepository;

#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
