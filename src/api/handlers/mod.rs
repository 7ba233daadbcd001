//! HTTP request handlers.

pub mod health;
pub mod submission;
pub mod submit;

pub use health::health_handler;
pub use submission::{submission_handler, submission_list_handler};
pub use submit::submit_handler;
