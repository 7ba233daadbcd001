//! Outbound web integrations backing the network-assisted generator.
//!
//! Both clients model degradation explicitly: a failed call yields `None`
//! and the generator substitutes neutral or randomized defaults.
//!
//! # Modules
//!
//! - [`page_fetcher`] - Website HTML retrieval and metadata extraction
//! - [`search_client`] - Google Custom Search lookups (or the null client)

pub mod page_fetcher;
pub mod search_client;

pub use page_fetcher::{HttpPageFetcher, PageFetcher, PageMetadata};
pub use search_client::{GoogleSearchClient, NullSearchClient, SearchClient, SearchData};

#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
#[cfg(test)]
pub use search_client::MockSearchClient;
