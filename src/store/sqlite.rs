use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::config::CASE_DOCUMENT_KEY;
use crate::error::{CaseEngineError, Result};
use crate::store::{decode_document, encode_document, CaseMap, CaseStore};

/// SQLite-backed case store
///
/// The whole document lives in one row of a key/value table:
/// ```sql
/// CREATE TABLE case_documents (
///     key TEXT PRIMARY KEY,
///     document TEXT NOT NULL,
///     updated_at TEXT NOT NULL
/// );
/// ```
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    key: String,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path`; `:memory:` works for tests
    pub fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS case_documents (
                key TEXT PRIMARY KEY,
                document TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            key: CASE_DOCUMENT_KEY.to_string(),
        })
    }

    /// Use a different document key, e.g. one library per user
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    fn connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| CaseEngineError::Store(format!("sqlite connection poisoned: {}", e)))
    }
}

impl CaseStore for SqliteStore {
    fn load(&self) -> Result<CaseMap> {
        let conn = self.connection()?;

        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM case_documents WHERE key = ?",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(text) => decode_document(&text),
            None => Ok(CaseMap::new()),
        }
    }

    fn save(&self, cases: &CaseMap) -> Result<()> {
        let document = encode_document(cases)?;
        let conn = self.connection()?;

        conn.execute(
            "INSERT OR REPLACE INTO case_documents (key, document, updated_at) VALUES (?1, ?2, ?3)",
            params![self.key, document, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CaseRecord;

    #[test]
    fn test_sqlite_store_create() {
        let store = SqliteStore::new(":memory:").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_sqlite_store_save_and_load() {
        let store = SqliteStore::new(":memory:").unwrap();

        let record = CaseRecord::evaluated("智能手机应用", Default::default(), Default::default());
        let mut cases = CaseMap::new();
        cases.insert(record.slug(), record);
        store.save(&cases).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["智能手机应用"].topic, "智能手机应用");

        // a second save replaces the row
        store.save(&CaseMap::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_sqlite_store_keys_are_isolated() {
        let store = SqliteStore::new(":memory:").unwrap();
        let mut cases = CaseMap::new();
        let record = CaseRecord::evaluated("x1", Default::default(), Default::default());
        cases.insert(record.slug(), record);
        store.save(&cases).unwrap();

        let other = SqliteStore {
            conn: Arc::clone(&store.conn),
            key: "another_library".to_string(),
        };
        assert!(other.load().unwrap().is_empty());
    }
}
