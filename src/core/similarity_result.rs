use serde::{Deserialize, Serialize};

use crate::core::CaseRecord;

/// A stored case matched against a query topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    /// The matched case
    #[serde(rename = "case")]
    pub case: CaseRecord,

    /// Final similarity (0.0 - 1.0)
    pub similarity: f64,

    /// Human-readable explanation, e.g. `包含关键词：手机，高质量案例`
    pub match_reason: String,
}

impl SimilarityResult {
    pub fn new(case: CaseRecord, similarity: f64, match_reason: impl Into<String>) -> Self {
        Self {
            case,
            similarity,
            match_reason: match_reason.into(),
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{} - {:.1}% [{}] ({})",
            self.case.topic,
            self.similarity * 100.0,
            self.case.quality,
            self.match_reason
        )
    }
}

/// Case library statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub total: usize,
    pub high_quality: usize,
    /// Cases created within the recent window
    pub recent: usize,
}
