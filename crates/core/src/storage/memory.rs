//! In-process medium

use std::collections::HashMap;

use super::PersistenceMedium;
use crate::error::StorageError;

/// Medium backed by a `HashMap`
///
/// Writes can be switched off to emulate storage that rejects them (quota
/// exceeded, private browsing).
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// A medium whose every write fails
    pub fn rejecting_writes() -> Self {
        Self {
            entries: HashMap::new(),
            reject_writes: true,
        }
    }

    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersistenceMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Unavailable(format!(
                "write to `{}` rejected",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
