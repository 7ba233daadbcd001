//! Network-assisted metrics generator.
//!
//! Blends a website scrape with a search API lookup into the same bundle
//! shape the deterministic generator produces. Every upstream failure is
//! absorbed: a degraded fetch yields no metadata, a degraded search yields a
//! randomized result count, and the caller always gets a complete bundle.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::volume::distribute_volumes;
use crate::domain::MetricsGenerator;
use crate::domain::entities::{BrandMetrics, Competitor, CompetitorLevel};
use crate::infrastructure::web::{PageFetcher, PageMetadata, SearchClient};

/// Keyword sets are capped at this many entries.
const MAX_KEYWORDS: usize = 8;

/// Monthly volume estimate is capped regardless of result count.
const MAX_MONTHLY_VOLUME: u64 = 500_000;

/// Synthetic competitor names used when search discovers fewer domains than
/// the analysis needs.
const FALLBACK_COMPETITORS: [&str; 7] = [
    "Market Leader Inc",
    "Industry Giant Ltd",
    "Top Brand Solutions",
    "Premium Choice Corp",
    "Elite Services Group",
    "Leading Edge Co",
    "Prime Competitors LLC",
];

/// Generator combining live website and search data with random jitter.
///
/// The random source is owned by the generator so tests can seed it; see
/// [`WebMetricsGenerator::with_rng`].
pub struct WebMetricsGenerator {
    fetcher: Arc<dyn PageFetcher>,
    search: Arc<dyn SearchClient>,
    rng: Mutex<StdRng>,
}

impl WebMetricsGenerator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, search: Arc<dyn SearchClient>) -> Self {
        Self::with_rng(fetcher, search, StdRng::from_os_rng())
    }

    /// Builds a generator with a caller-supplied random source.
    pub fn with_rng(
        fetcher: Arc<dyn PageFetcher>,
        search: Arc<dyn SearchClient>,
        rng: StdRng,
    ) -> Self {
        Self {
            fetcher,
            search,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl MetricsGenerator for WebMetricsGenerator {
    async fn generate(&self, brand_name: &str, brand_website: &str) -> BrandMetrics {
        let page = self.fetcher.fetch(brand_website).await;
        let has_website = page.as_ref().is_some_and(|p| !p.title.is_empty());
        tracing::debug!(
            "Website data for {brand_name}: {}",
            if has_website { "fetched" } else { "unavailable" }
        );

        let search = self.search.search(brand_name).await;

        let mut rng = self.rng.lock().await;
        let (total_results, competitor_domains) = match search {
            Some(data) => (data.total_results, data.competitor_domains),
            None => (rng.random_range(10_000..510_000), Vec::new()),
        };
        tracing::debug!("Search results for {brand_name}: {total_results}");

        let top_keywords = assemble_keywords(brand_name, page.as_ref());

        let search_score =
            calculate_search_score(total_results, has_website, top_keywords.len(), &mut rng);
        let competitor_level = CompetitorLevel::from_score(search_score);

        let competitor_analysis =
            build_competitor_analysis(&competitor_domains, search_score, &mut rng);

        // Monthly volume is estimated as 1% of total results, distributed
        // over the keywords; the reported total is the post-rounding sum.
        let monthly_volume = (((total_results as f64) * 0.01).floor() as u64).min(MAX_MONTHLY_VOLUME);
        let keyword_volumes = distribute_volumes(&top_keywords, monthly_volume);
        let monthly_search_volume = keyword_volumes.iter().map(|kv| kv.volume).sum();

        BrandMetrics {
            search_score,
            top_keywords,
            monthly_search_volume,
            competitor_level,
            competitor_analysis,
            keyword_volumes,
        }
    }
}

/// Builds an ordered, de-duplicated keyword set.
///
/// Seeds with the brand name and two fixed variations, then meta keywords of
/// reasonable length, then up to five plain lowercase words pulled from the
/// page title and description, capped at [`MAX_KEYWORDS`] total.
fn assemble_keywords(brand_name: &str, page: Option<&PageMetadata>) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    let push_unique = |keywords: &mut Vec<String>, candidate: String| {
        if !keywords.contains(&candidate) {
            keywords.push(candidate);
        }
    };

    let base = brand_name.trim().to_lowercase();
    push_unique(&mut keywords, base.clone());
    push_unique(&mut keywords, format!("{base} brand"));
    push_unique(&mut keywords, format!("{base} online"));

    if let Some(page) = page {
        for keyword in &page.keywords {
            let len = keyword.chars().count();
            if len > 2 && len < 50 {
                push_unique(&mut keywords, keyword.clone());
            }
        }

        let text = format!("{} {}", page.title, page.description).to_lowercase();
        let words = text
            .split_whitespace()
            .filter(|word| {
                let len = word.chars().count();
                len > 3 && len < 20
            })
            .filter(|word| word.chars().all(|c| c.is_ascii_lowercase()))
            .take(5);
        for word in words {
            push_unique(&mut keywords, word.to_string());
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Scores brand visibility from result volume, website presence and keyword
/// richness, plus a little jitter, clamped to 40-100.
fn calculate_search_score(
    total_results: u64,
    has_website: bool,
    keyword_count: usize,
    rng: &mut StdRng,
) -> u32 {
    let mut score: u32 = 40;

    score += match total_results {
        r if r > 1_000_000 => 20,
        r if r > 100_000 => 15,
        r if r > 10_000 => 10,
        r if r > 1_000 => 5,
        _ => 0,
    };

    if has_website {
        score += 15;
    }

    score += (keyword_count as u32 * 3).min(15);

    score += rng.random_range(0..10);

    score.clamp(40, 100)
}

/// Builds 3-5 competitors, preferring discovered domains over the synthetic
/// pool, with scores within ±20 of the brand's, sorted descending.
fn build_competitor_analysis(
    competitor_domains: &[String],
    brand_score: u32,
    rng: &mut StdRng,
) -> Vec<Competitor> {
    let count = competitor_domains.len().clamp(3, 5);
    let mut competitors = Vec::with_capacity(count);

    for i in 0..count {
        let name = competitor_domains
            .get(i)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COMPETITORS[i])
            .to_string();

        let variation: i64 = rng.random_range(-20..20);
        let score = (brand_score as i64 + variation).clamp(40, 95) as u32;
        let market_share = rng.random_range(10..35);

        competitors.push(Competitor {
            name,
            score,
            market_share,
        });
    }

    competitors.sort_by(|a, b| b.score.cmp(&a.score));
    competitors
}
