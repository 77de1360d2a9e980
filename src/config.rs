use serde::{Deserialize, Serialize};

use crate::core::QualityTier;

/// Weight of token-overlap (cosine) similarity in the blended score
pub const COSINE_WEIGHT: f64 = 0.7;

/// Weight of edit-distance similarity in the blended score
pub const EDIT_WEIGHT: f64 = 0.3;

/// Below this title similarity the semantic booster is consulted
pub const SEMANTIC_TRIGGER: f64 = 0.5;

/// Discount applied to the semantic score before it competes with the title score
pub const SEMANTIC_DISCOUNT: f64 = 0.7;

/// Booster multiplier for `high` tier cases
pub const HIGH_TIER_BOOST: f64 = 1.2;

/// Booster multiplier for cases whose numeric score exceeds [`HIGH_SCORE_THRESHOLD`]
pub const HIGH_SCORE_BOOST: f64 = 1.1;

pub const HIGH_SCORE_THRESHOLD: u32 = 80;

/// Tier classifier cut-offs
pub const HIGH_TIER_MIN: u32 = 80;
pub const MEDIUM_TIER_MIN: u32 = 60;

/// Cases created within this many days count as recent in stats
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Storage key of the case document (shared with the browser app's localStorage key)
pub const CASE_DOCUMENT_KEY: &str = "osborn_local_cases";

fn default_min_similarity() -> f64 {
    0.3
}

fn default_max_results() -> usize {
    10
}

fn default_true() -> bool {
    true
}

/// Options for [`crate::CaseEngine::find_similar_cases`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    /// Candidates scoring below this are discarded
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,

    /// Upper bound on returned results
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Only consider cases of this tier
    #[serde(default)]
    pub quality_filter: Option<QualityTier>,

    /// Rescue weak title matches through keyword overlap with case content
    #[serde(default = "default_true")]
    pub use_semantic_search: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            min_similarity: default_min_similarity(),
            max_results: default_max_results(),
            quality_filter: None,
            use_semantic_search: true,
        }
    }
}

impl FindOptions {
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_quality_filter(mut self, tier: QualityTier) -> Self {
        self.quality_filter = Some(tier);
        self
    }

    pub fn without_semantic_search(mut self) -> Self {
        self.use_semantic_search = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FindOptions::default();
        assert_eq!(options.min_similarity, 0.3);
        assert_eq!(options.max_results, 10);
        assert_eq!(options.quality_filter, None);
        assert!(options.use_semantic_search);
    }

    #[test]
    fn test_partial_options_from_json() {
        let options: FindOptions =
            serde_json::from_str(r#"{"maxResults": 3, "qualityFilter": "high"}"#).unwrap();
        assert_eq!(options.max_results, 3);
        assert_eq!(options.quality_filter, Some(QualityTier::High));
        assert_eq!(options.min_similarity, 0.3);
        assert!(options.use_semantic_search);
    }

    #[test]
    fn test_blend_weights_sum_to_one() {
        assert_eq!(COSINE_WEIGHT + EDIT_WEIGHT, 1.0);
    }
}
