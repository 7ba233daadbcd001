//! Brand metrics generation.
//!
//! Two generators share one output contract: [`HashMetricsGenerator`] maps a
//! brand name to a stable bundle with no I/O, [`WebMetricsGenerator`] blends
//! a website scrape with a search lookup and degrades to randomized
//! fallbacks. Both split volume through [`volume::distribute_volumes`].

pub mod hash_generator;
pub mod volume;
pub mod web_generator;

pub use hash_generator::HashMetricsGenerator;
pub use web_generator::WebMetricsGenerator;
