//! JSON file store: a flat map of string keys to string values.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tateti_engine::{Score, ScoreStore};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use super::{PreferenceStore, StoreError};

/// Key holding the JSON-encoded score.
pub const SCORE_KEY: &str = "tateti-score";

/// Key holding the accent color preference.
pub const ACCENT_KEY: &str = "tateti-bgcolor";

/// Key-value store backed by a single JSON file.
///
/// Every operation re-reads the file, so several handles on the same path
/// see each other's writes. A missing or empty file reads as an empty map.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at `path`. Nothing is touched on disk until the
    /// first write.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Opening file store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or is not a JSON
    /// object of strings.
    #[instrument(skip(self))]
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// An unreadable file is replaced rather than left blocking writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self, value))]
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries_for_update();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self))]
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries_for_update();
        if entries.remove(key).is_none() {
            debug!("Key not present");
            return Ok(());
        }
        self.write_entries(&entries)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn entries_for_update(&self) -> BTreeMap<String, String> {
        self.read_entries().unwrap_or_else(|e| {
            warn!(error = %e, path = %self.path.display(), "Discarding unreadable store");
            BTreeMap::new()
        })
    }

    /// Writes the whole map to a sibling temp file and renames it over the
    /// store, so readers never observe a partially written file.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let content = serde_json::to_string_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(keys = entries.len(), "Store written");
        Ok(())
    }
}

impl ScoreStore for FileStore {
    #[instrument(skip(self))]
    fn save_score(&mut self, score: &Score) {
        let result = serde_json::to_string(score)
            .map_err(StoreError::from)
            .and_then(|json| self.set(SCORE_KEY, &json));
        if let Err(e) = result {
            warn!(error = %e, "Failed to save score");
        }
    }

    #[instrument(skip(self))]
    fn clear_score(&mut self) {
        if let Err(e) = self.remove(SCORE_KEY) {
            warn!(error = %e, "Failed to clear score");
        }
    }

    #[instrument(skip(self))]
    fn load_score(&self) -> Option<Score> {
        let raw = match self.get(SCORE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read score");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(score) => Some(score),
            Err(e) => {
                warn!(error = %e, raw = %raw, "Ignoring corrupt score record");
                None
            }
        }
    }
}

impl PreferenceStore for FileStore {
    #[instrument(skip(self))]
    fn load_accent(&self) -> Option<String> {
        self.get(ACCENT_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read accent color");
            None
        })
    }

    #[instrument(skip(self))]
    fn save_accent(&mut self, color: &str) {
        if let Err(e) = self.set(ACCENT_KEY, color) {
            warn!(error = %e, "Failed to save accent color");
        }
    }

    #[instrument(skip(self))]
    fn clear_accent(&mut self) {
        if let Err(e) = self.remove(ACCENT_KEY) {
            warn!(error = %e, "Failed to clear accent color");
        }
    }
}
