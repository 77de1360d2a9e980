pub mod blended;
pub mod cosine;
pub mod edit_distance;
pub mod vector;

pub use blended::{blended_similarity, compare_topics, BlendedScore, BlendedScorer};
pub use cosine::{cosine_similarity, text_vector, CosineScorer};
pub use edit_distance::{edit_similarity, levenshtein_distance, EditDistanceScorer};
pub use vector::TermVector;

/// Trait for pairwise text similarity implementations
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of `a` and `b` in [0, 1]
    fn score(&self, a: &str, b: &str) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}
