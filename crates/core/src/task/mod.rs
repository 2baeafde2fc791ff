//! Task module
//!
//! This module contains task-related types and the task store.

mod model;
mod seed;
mod store;

pub use model::*;
pub use seed::SAMPLE_TASK_COUNT;
pub use store::{TaskStore, TASKS_KEY};
