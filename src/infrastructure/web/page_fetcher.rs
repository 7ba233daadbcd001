//! Website metadata fetching and HTML extraction.

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;

/// Identifies the analyzer to scraped sites.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; BrandAnalyzer/1.0)";

/// Meta keywords are capped to the first entries of the tag.
const MAX_META_KEYWORDS: usize = 10;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static OG_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:description"]"#).unwrap());
static META_KEYWORDS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="keywords"]"#).unwrap());

/// Metadata extracted from a brand's landing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Lower-cased, trimmed meta keywords, at most [`MAX_META_KEYWORDS`].
    pub keywords: Vec<String>,
}

/// Retrieves page metadata for a website URL.
///
/// `None` means the fetch degraded (network failure, non-success status,
/// unreadable body); callers proceed with no metadata instead of failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<PageMetadata>;
}

/// `reqwest`-backed fetcher parsing metadata out of the landing page HTML.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    async fn fetch_html(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Option<PageMetadata> {
        match self.fetch_html(url).await {
            Ok(html) => Some(parse_metadata(&html)),
            Err(e) => {
                tracing::debug!("Website fetch failed for {url}: {e}");
                None
            }
        }
    }
}

/// Extracts title, description and meta keywords from an HTML document.
///
/// `<title>` falls back to `og:title`, the description meta tag to
/// `og:description`. Missing pieces come back empty rather than erroring.
fn parse_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>())
        .filter(|text| !text.is_empty())
        .or_else(|| meta_content(&document, &OG_TITLE))
        .unwrap_or_default();

    let description = meta_content(&document, &DESCRIPTION)
        .or_else(|| meta_content(&document, &OG_DESCRIPTION))
        .unwrap_or_default();

    let keywords = meta_content(&document, &META_KEYWORDS)
        .unwrap_or_default()
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .take(MAX_META_KEYWORDS)
        .collect();

    PageMetadata {
        title,
        description,
        keywords,
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
}
