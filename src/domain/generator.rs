//! Metrics generation contract.

use async_trait::async_trait;

use crate::domain::entities::BrandMetrics;

/// A source of brand visibility metrics.
///
/// Implementations never fail outward: whatever happens upstream, a complete
/// [`BrandMetrics`] bundle comes back. Network-backed implementations fall
/// back to synthetic data instead of surfacing errors.
///
/// # Implementations
///
/// - [`HashMetricsGenerator`](crate::application::metrics::HashMetricsGenerator) - deterministic, no I/O
/// - [`WebMetricsGenerator`](crate::application::metrics::WebMetricsGenerator) - website scrape plus search API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsGenerator: Send + Sync {
    /// Produces the metrics bundle for a brand.
    ///
    /// `brand_website` is advisory: the deterministic implementation
    /// ignores it.
    async fn generate(&self, brand_name: &str, brand_website: &str) -> BrandMetrics;
}
