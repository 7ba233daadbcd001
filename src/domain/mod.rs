//! Domain layer: business entities and the contracts the rest of the
//! application is written against.

pub mod entities;
pub mod generator;
pub mod repositories;

pub use generator::MetricsGenerator;

#[cfg(test)]
pub use generator::MockMetricsGenerator;
