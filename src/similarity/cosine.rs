use std::collections::BTreeSet;

use crate::similarity::{SimilarityScorer, TermVector};
use crate::text::{normalize, segment};

/// Cosine similarity over the union of both vectors' tokens.
///
/// Returns 0 when either vector has zero norm. The union is walked in sorted
/// order, so `cosine_similarity(a, b) == cosine_similarity(b, a)` exactly.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let union: BTreeSet<&str> = a.keys().chain(b.keys()).collect();

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for token in union {
        let va = a.get(token);
        let vb = b.get(token);
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Build the term vector of raw text: normalize, segment, count
pub fn text_vector(text: &str) -> TermVector {
    TermVector::from_tokens(segment(&normalize(text)))
}

/// Token-overlap scorer on segmented text
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineScorer;

impl CosineScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for CosineScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        cosine_similarity(&text_vector(a), &text_vector(b))
    }

    fn name(&self) -> &str {
        "cosine"
    }
}
