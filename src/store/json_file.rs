use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::{decode_document, encode_document, CaseMap, CaseStore};

/// Case document kept as one JSON file.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "cases.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CaseStore for JsonFileStore {
    fn load(&self) -> Result<CaseMap> {
        if !self.path.exists() {
            return Ok(CaseMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        decode_document(&text)
    }

    fn save(&self, cases: &CaseMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, encode_document(cases)?)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!("Wrote {} cases to {}", cases.len(), self.path.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
