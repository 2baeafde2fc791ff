//! Error types for the core library

use thiserror::Error;

/// Reasons a new task is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    #[error("Title and due date are both required")]
    MissingField,

    #[error("Due date must be today or later")]
    PastDate,

    #[error("A pending task with this title already exists")]
    Duplicate,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("Task not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoveError {
    #[error("Task not found: {0}")]
    NotFound(String),
}

/// Failures of a persistence medium
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
