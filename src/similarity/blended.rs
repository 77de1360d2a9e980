use crate::config::{COSINE_WEIGHT, EDIT_WEIGHT};
use crate::similarity::{cosine_similarity, edit_similarity, SimilarityScorer, TermVector};
use crate::text::{normalize, segment};

/// Component scores of one topic comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedScore {
    pub cosine: f64,
    pub edit: f64,
    pub blended: f64,
}

/// Compare two topics: cosine over segmented term vectors blended with
/// edit similarity over the normalized strings.
///
/// Topics that normalize to the same non-empty string score exactly 1.
pub fn compare_topics(a: &str, b: &str) -> BlendedScore {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if !norm_a.is_empty() && norm_a == norm_b {
        return BlendedScore {
            cosine: 1.0,
            edit: 1.0,
            blended: 1.0,
        };
    }

    let cosine = cosine_similarity(
        &TermVector::from_tokens(segment(&norm_a)),
        &TermVector::from_tokens(segment(&norm_b)),
    );
    let edit = edit_similarity(&norm_a, &norm_b);
    let blended = (COSINE_WEIGHT * cosine + EDIT_WEIGHT * edit).clamp(0.0, 1.0);

    BlendedScore { cosine, edit, blended }
}

/// Blended topic similarity in [0, 1]
pub fn blended_similarity(a: &str, b: &str) -> f64 {
    compare_topics(a, b).blended
}

/// Default title scorer used by the retrieval service
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendedScorer;

impl BlendedScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for BlendedScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        blended_similarity(a, b)
    }

    fn name(&self) -> &str {
        "blended"
    }
}
