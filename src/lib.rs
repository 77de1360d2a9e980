//! # Osborn Case Engine
//!
//! Local case library for Osborn checklist brainstorming:
//! - Blended title similarity (term-vector cosine + edit distance) with CJK bigram segmentation
//! - Keyword-overlap rescue for weak title matches
//! - Quality tier and score evaluation of saved cases
//! - Topic analysis and nine-dimension suggestions adapted from the best match
//! - Pluggable whole-document stores: memory, JSON file, SQLite
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use osborn_case_engine::{CaseEngine, FindOptions, SqliteStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = CaseEngine::new(Arc::new(SqliteStore::new("cases.db")?));
//!
//!     for result in engine.find_similar_cases("智能手表应用", &FindOptions::default()) {
//!         println!("{}", result.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapt;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod industry;
pub mod inspiration;
pub mod quality;
pub mod random;
pub mod semantic;
pub mod similarity;
pub mod store;
pub mod text;

// Re-export primary types
pub use adapt::{adapt_case, adapt_suggestion_to_topic};
pub use config::FindOptions;
pub use core::{CaseRecord, CaseStats, Dimension, KeywordAnalysis, NineDimensions, QualityTier, SimilarityResult};
pub use engine::{match_reason, CaseEngine};
pub use error::{CaseEngineError, Result};
pub use industry::{detect_industry, Industry};
pub use quality::{calculate_case_score, evaluate_case_quality};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use similarity::{blended_similarity, SimilarityScorer};
pub use store::{CaseMap, CaseStore, JsonFileStore, MemoryStore, SqliteStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
