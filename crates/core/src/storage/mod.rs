//! Persistence medium
//!
//! A string key-value store in the manner of browser local storage. The task
//! store and the preferences both live in one medium under separate keys.

mod file_medium;
mod memory;

pub use file_medium::JsonFileMedium;
pub use memory::MemoryMedium;

use crate::error::StorageError;

/// Key-value string store
pub trait PersistenceMedium {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
