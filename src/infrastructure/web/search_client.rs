//! Search result lookup via the Google Custom Search API.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::SearchCredentials;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Competitor domains are taken from the first result links only.
const MAX_COMPETITOR_DOMAINS: usize = 5;

/// Aggregate data returned by a search lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchData {
    /// Estimated total result count reported by the engine.
    pub total_results: u64,
    /// Result hostnames with any leading `www.` stripped, at most
    /// [`MAX_COMPETITOR_DOMAINS`] entries.
    pub competitor_domains: Vec<String>,
}

/// Looks up search visibility data for a brand name.
///
/// `None` means the lookup degraded (unconfigured credentials, network or
/// API failure); callers substitute randomized fallback data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Option<SearchData>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "searchInformation")]
    search_information: Option<SearchInformation>,
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchInformation {
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

/// Live client for the Google Custom Search JSON API.
pub struct GoogleSearchClient {
    client: reqwest::Client,
    credentials: SearchCredentials,
}

impl GoogleSearchClient {
    /// Creates a client with the given credentials and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(credentials: SearchCredentials, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            credentials,
        })
    }

    async fn query(&self, query: &str) -> Result<SearchResponse, reqwest::Error> {
        self.client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("cx", self.credentials.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl SearchClient for GoogleSearchClient {
    async fn search(&self, query: &str) -> Option<SearchData> {
        match self.query(query).await {
            Ok(response) => Some(extract_search_data(response)),
            Err(e) => {
                tracing::warn!("Search lookup failed for '{query}': {e}");
                None
            }
        }
    }
}

/// Null implementation used when search credentials are not configured.
///
/// Every lookup reports degradation, which routes the generator onto its
/// randomized fallback path.
pub struct NullSearchClient;

impl NullSearchClient {
    pub fn new() -> Self {
        tracing::debug!("Using NullSearchClient (search lookups disabled)");
        Self
    }
}

impl Default for NullSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchClient for NullSearchClient {
    async fn search(&self, _query: &str) -> Option<SearchData> {
        None
    }
}

/// Converts an API response into [`SearchData`].
///
/// An unparseable result count defaults to 0; unparseable result links are
/// skipped rather than failing the lookup.
fn extract_search_data(response: SearchResponse) -> SearchData {
    let total_results = response
        .search_information
        .and_then(|info| info.total_results)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);

    let competitor_domains = response
        .items
        .unwrap_or_default()
        .into_iter()
        .take(MAX_COMPETITOR_DOMAINS)
        .filter_map(|item| domain_of(&item.link))
        .collect();

    SearchData {
        total_results,
        competitor_domains,
    }
}

fn domain_of(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
