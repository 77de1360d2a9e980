use rapidfuzz::distance::levenshtein;

use crate::similarity::SimilarityScorer;
use crate::text::normalize;

/// Exact Levenshtein distance in chars (insert, delete, substitute all cost 1)
#[inline]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// `(max_len - distance) / max_len`, or 1.0 when both strings are empty
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b).min(max_len);
    (max_len - distance) as f64 / max_len as f64
}

/// Surface-form scorer on normalized, unsegmented text
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceScorer;

impl EditDistanceScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for EditDistanceScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        edit_similarity(&normalize(a), &normalize(b))
    }

    fn name(&self) -> &str {
        "levenshtein"
    }
}
