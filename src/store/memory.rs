use std::sync::Mutex;

use crate::core::CaseRecord;
use crate::error::{CaseEngineError, Result};
use crate::store::{decode_document, CaseMap, CaseStore};

/// In-process case store
#[derive(Debug, Default)]
pub struct MemoryStore {
    cases: Mutex<CaseMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `records`, keyed by their slugs
    pub fn with_cases(records: impl IntoIterator<Item = CaseRecord>) -> Self {
        let cases = records.into_iter().map(|r| (r.slug(), r)).collect();
        Self {
            cases: Mutex::new(cases),
        }
    }

    /// Store pre-filled from a JSON case document
    pub fn from_document(text: &str) -> Result<Self> {
        Ok(Self {
            cases: Mutex::new(decode_document(text)?),
        })
    }
}

impl CaseStore for MemoryStore {
    fn load(&self) -> Result<CaseMap> {
        let cases = self
            .cases
            .lock()
            .map_err(|e| CaseEngineError::Store(format!("memory store poisoned: {}", e)))?;
        Ok(cases.clone())
    }

    fn save(&self, cases: &CaseMap) -> Result<()> {
        let mut current = self
            .cases
            .lock()
            .map_err(|e| CaseEngineError::Store(format!("memory store poisoned: {}", e)))?;
        *current = cases.clone();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        assert!(MemoryStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_save_replaces_document() {
        let store = MemoryStore::with_cases([CaseRecord::evaluated("a1", Default::default(), Default::default())]);
        assert_eq!(store.load().unwrap().len(), 1);

        store.save(&CaseMap::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_from_document() {
        let store = MemoryStore::from_document(r#"{"k": {"topic": "智能手机"}}"#).unwrap();
        assert_eq!(store.load().unwrap()["k"].topic, "智能手机");
    }
}
