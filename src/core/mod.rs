pub mod case_record;
pub mod dimensions;
pub mod similarity_result;

pub use case_record::{slug, split_entries, CaseRecord, KeywordAnalysis, QualityTier};
pub use dimensions::{Dimension, NineDimensions};
pub use similarity_result::{CaseStats, SimilarityResult};
