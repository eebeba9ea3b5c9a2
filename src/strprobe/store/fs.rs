use super::EntryStore;
use crate::error::{Result, StrprobeError};
use crate::filter::FilterPredicate;
use crate::model::AnalyzedEntry;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "data.json";

/// File-based storage: all entries live in a single JSON document under the
/// store root. Load, modify, rewrite; good enough for the collection sizes
/// this tool sees.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StrprobeError::Io)?;
        }
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<AnalyzedEntry>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file)?;
        let entries: Vec<AnalyzedEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &[AnalyzedEntry]) -> Result<()> {
        self.ensure_dir()?;
        log::debug!("writing {} entries to {:?}", entries.len(), self.data_file());
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.data_file(), content)?;
        Ok(())
    }
}

impl EntryStore for FileStore {
    fn save(&mut self, entry: &AnalyzedEntry) -> Result<()> {
        let mut entries = self.load_entries()?;
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(StrprobeError::Duplicate(entry.id.clone()));
        }
        entries.push(entry.clone());
        self.write_entries(&entries)
    }

    fn find_by_id(&self, id: &str) -> Result<AnalyzedEntry> {
        self.load_entries()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StrprobeError::NotFound(id.to_string()))
    }

    fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedEntry>> {
        Ok(self
            .load_entries()?
            .into_iter()
            .find(|e| e.value == value))
    }

    fn list(&self) -> Result<Vec<AnalyzedEntry>> {
        self.load_entries()
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(StrprobeError::NotFound(id.to_string()));
        }
        self.write_entries(&entries)
    }

    // The pushdown: the predicate is evaluated while scanning the data file
    // instead of materializing the whole collection for the caller.
    fn query(&self, predicate: &FilterPredicate) -> Result<Vec<AnalyzedEntry>> {
        Ok(self
            .load_entries()?
            .into_iter()
            .filter(|e| predicate.matches(&e.properties))
            .collect())
    }
}
