//! Brand metrics entities shared by both generators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse banding of market competitiveness derived from the search score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitorLevel {
    Low,
    Medium,
    High,
}

impl CompetitorLevel {
    /// Derives the level from a search score: >75 High, >55 Medium, else Low.
    pub fn from_score(score: u32) -> Self {
        if score > 75 {
            Self::High
        } else if score > 55 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for CompetitorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

/// A competing brand with its synthetic score and market share percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub score: u32,
    pub market_share: u32,
}

/// Estimated monthly search volume attributed to a single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordVolume {
    pub keyword: String,
    pub volume: u64,
}

/// The full visibility report generated for one brand.
///
/// `keyword_volumes` mirrors `top_keywords` entry for entry, and
/// `competitor_analysis` is sorted descending by score. Field names are
/// camelCase on the wire and in the storage file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMetrics {
    pub search_score: u32,
    pub top_keywords: Vec<String>,
    pub monthly_search_volume: u64,
    pub competitor_level: CompetitorLevel,
    pub competitor_analysis: Vec<Competitor>,
    pub keyword_volumes: Vec<KeywordVolume>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(CompetitorLevel::from_score(40), CompetitorLevel::Low);
        assert_eq!(CompetitorLevel::from_score(55), CompetitorLevel::Low);
        assert_eq!(CompetitorLevel::from_score(56), CompetitorLevel::Medium);
        assert_eq!(CompetitorLevel::from_score(75), CompetitorLevel::Medium);
        assert_eq!(CompetitorLevel::from_score(76), CompetitorLevel::High);
        assert_eq!(CompetitorLevel::from_score(100), CompetitorLevel::High);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(CompetitorLevel::Low.to_string(), "Low");
        assert_eq!(CompetitorLevel::Medium.to_string(), "Medium");
        assert_eq!(CompetitorLevel::High.to_string(), "High");
    }

    #[test]
    fn test_metrics_serialize_camel_case() {
        let metrics = BrandMetrics {
            search_score: 72,
            top_keywords: vec!["acme".to_string()],
            monthly_search_volume: 12_000,
            competitor_level: CompetitorLevel::Medium,
            competitor_analysis: vec![Competitor {
                name: "MarketLeader Corp".to_string(),
                score: 61,
                market_share: 18,
            }],
            keyword_volumes: vec![KeywordVolume {
                keyword: "acme".to_string(),
                volume: 12_000,
            }],
        };

        let json = serde_json::to_value(&metrics).unwrap();

        assert_eq!(json["searchScore"], 72);
        assert_eq!(json["monthlySearchVolume"], 12_000);
        assert_eq!(json["competitorLevel"], "Medium");
        assert_eq!(json["competitorAnalysis"][0]["marketShare"], 18);
        assert_eq!(json["keywordVolumes"][0]["keyword"], "acme");
    }

    #[test]
    fn test_metrics_roundtrip() {
        let metrics = BrandMetrics {
            search_score: 88,
            top_keywords: vec!["acme".to_string(), "acme brand".to_string()],
            monthly_search_volume: 250_000,
            competitor_level: CompetitorLevel::High,
            competitor_analysis: vec![],
            keyword_volumes: vec![],
        };

        let json = serde_json::to_string(&metrics).unwrap();
        let back: BrandMetrics = serde_json::from_str(&json).unwrap();

        assert_eq!(back, metrics);
    }
}
