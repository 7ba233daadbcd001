//! Deterministic metrics generator driven by a string hash.
//!
//! Maps a brand name to a stable pseudo-random metrics bundle with no I/O.
//! Two calls with the same name yield bit-identical output.

use async_trait::async_trait;

use super::volume::distribute_volumes;
use crate::domain::MetricsGenerator;
use crate::domain::entities::{BrandMetrics, Competitor, CompetitorLevel};

/// Fixed keyword phrase templates, truncated per brand to 5-8 entries.
const KEYWORD_TEMPLATES: usize = 8;

/// Fixed pool of synthetic competitor names.
const COMPETITOR_POOL: [&str; 5] = [
    "MarketLeader Corp",
    "IndustryGiant Ltd",
    "TopBrand Solutions",
    "PremiumChoice Inc",
    "EliteServices Group",
];

/// Deterministic generator: same brand name in, same bundle out.
pub struct HashMetricsGenerator;

impl HashMetricsGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 31-based rolling hash over the name's UTF-16 code units, wrapped to
    /// 32 bits and folded to a non-negative value.
    fn simple_hash(input: &str) -> u32 {
        let mut hash: i32 = 0;
        for unit in input.encode_utf16() {
            hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
        }
        hash.unsigned_abs()
    }

    /// Builds 5-8 keyword phrases from the lower-cased trimmed brand name.
    fn generate_keywords(brand_name: &str, hash: u32) -> Vec<String> {
        let base = brand_name.trim().to_lowercase();
        let mut keywords = vec![
            base.clone(),
            format!("{base} brand"),
            format!("{base} online"),
            format!("{base} reviews"),
            format!("best {base}"),
            format!("{base} products"),
            format!("{base} services"),
            format!("buy {base}"),
        ];
        debug_assert_eq!(keywords.len(), KEYWORD_TEMPLATES);

        let count = 5 + (hash % 4) as usize;
        keywords.truncate(count);
        keywords
    }

    /// Builds 3-5 competitors from the fixed pool, each seeded off the brand
    /// hash, sorted descending by score.
    fn generate_competitors(hash: u32) -> Vec<Competitor> {
        let count = 3 + (hash % 3) as usize;
        let mut competitors = Vec::with_capacity(count);

        for i in 0..count {
            let seed = hash.wrapping_add(i as u32 * 1000);
            competitors.push(Competitor {
                name: COMPETITOR_POOL[i % COMPETITOR_POOL.len()].to_string(),
                score: 40 + seed % 55,
                market_share: 10 + seed % 30,
            });
        }

        competitors.sort_by(|a, b| b.score.cmp(&a.score));
        competitors
    }

    /// Synchronous core, also used directly by tests.
    pub fn generate_metrics(brand_name: &str) -> BrandMetrics {
        let hash = Self::simple_hash(brand_name);

        let search_score = 40 + hash % 61;
        let monthly_search_volume = 1000 + (hash as u64) % 499_000;
        let competitor_level = CompetitorLevel::from_score(search_score);

        let top_keywords = Self::generate_keywords(brand_name, hash);
        let competitor_analysis = Self::generate_competitors(hash);
        let keyword_volumes = distribute_volumes(&top_keywords, monthly_search_volume);

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

impl Default for HashMetricsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsGenerator for HashMetricsGenerator {
    async fn generate(&self, brand_name: &str, _brand_website: &str) -> BrandMetrics {
        Self::generate_metrics(brand_name)
    }
}
