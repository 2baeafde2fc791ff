//! File-based medium
//!
//! Stores every key as a string value inside one JSON object on disk:
//! ```text
//! .school-tasks/
//!   storage.json   # {"schoolTasks": "[...]", "darkMode": "false"}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use super::PersistenceMedium;
use crate::error::StorageError;

/// File name used inside a data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Medium persisted to a single JSON file
///
/// Every access goes to disk, so two handles on the same path see each
/// other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileMedium {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonFileMedium {
    /// Create a medium over `path`
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a medium over `<data_dir>/storage.json`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Write to a temp file beside the target, then rename it into place, so
    /// a crash mid-write leaves the previous file intact
    fn write_atomically(&self, content: &str) -> Result<(), StorageError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4().as_hyphenated()));
        fs::write(&temp_path, content)?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl PersistenceMedium for JsonFileMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Serialization(e)) => {
                warn!(
                    "Discarding unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&entries)?;

        self.write_atomically(&content)?;
        debug!("Wrote key `{}` to {}", key, self.path.display());
        Ok(())
    }
}
