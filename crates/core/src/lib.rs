//! Core library for School Tasks
//!
//! This crate contains the task state manager, including:
//! - Task management (validated add/toggle/remove, filtered queries, stats)
//! - Urgency classification of due dates
//! - Snapshot persistence over a string key-value medium

pub mod clock;
pub mod error;
pub mod preferences;
pub mod storage;
pub mod task;
pub mod urgency;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AddError, RemoveError, StorageError, ToggleError};
pub use storage::{JsonFileMedium, MemoryMedium, PersistenceMedium};
pub use task::{Task, TaskFilter, TaskStats, TaskStore, TASKS_KEY};
pub use urgency::Urgency;
