//! Whole-document persistence for the case library.
//!
//! The library is one JSON object mapping slug to [`CaseRecord`]. Stores read
//! and write it as a unit; there is no partial update. Callers do
//! read-modify-write, so two writers working from the same snapshot lose one
//! of their updates (last writer wins).

pub mod json_file;
pub mod memory;
pub mod sqlite;

use std::collections::BTreeMap;

use crate::core::CaseRecord;
use crate::error::{CaseEngineError, Result};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Slug to record, ordered by slug
pub type CaseMap = BTreeMap<String, CaseRecord>;

/// Trait for case document storage backends
pub trait CaseStore: Send + Sync {
    /// Read the whole document. A store that has never been written loads empty.
    fn load(&self) -> Result<CaseMap>;

    /// Replace the whole document
    fn save(&self, cases: &CaseMap) -> Result<()>;

    /// Get store name for logging
    fn name(&self) -> &str;
}

/// Decode a case document.
///
/// Records without a usable topic are skipped with a warning so that one bad
/// entry does not hide the rest of the library. A blank document is empty.
pub fn decode_document(text: &str) -> Result<CaseMap> {
    if text.trim().is_empty() {
        return Ok(CaseMap::new());
    }

    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Object(entries) = value else {
        return Err(CaseEngineError::Store("case document is not a JSON object".to_string()));
    };

    let mut cases = CaseMap::new();
    for (key, entry) in entries {
        match serde_json::from_value::<CaseRecord>(entry) {
            Ok(record) => {
                cases.insert(key, record);
            }
            Err(e) => {
                tracing::warn!("⚠️ Skipping malformed case '{}': {}", key, e);
            }
        }
    }

    Ok(cases)
}

/// Encode a case document
pub fn encode_document(cases: &CaseMap) -> Result<String> {
    Ok(serde_json::to_string(cases)?)
}
