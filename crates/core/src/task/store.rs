//! Task store
//!
//! Owns the canonical task list and writes a full JSON snapshot to the
//! persistence medium after every successful mutation. Storage failures
//! are logged and never fail the mutation itself.

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::model::{Task, TaskFilter, TaskStats};
use super::seed::sample_tasks;
use crate::clock::{Clock, SystemClock};
use crate::error::{AddError, RemoveError, ToggleError};
use crate::storage::PersistenceMedium;
use crate::urgency::Urgency;

/// Medium key holding the task snapshot
pub const TASKS_KEY: &str = "schoolTasks";

/// Authoritative task collection
pub struct TaskStore<M: PersistenceMedium, C: Clock = SystemClock> {
    medium: M,
    clock: C,
    /// Tasks in insertion order; ids are unique
    tasks: Vec<Task>,
    filter: TaskFilter,
}

impl<M: PersistenceMedium, C: Clock> TaskStore<M, C> {
    /// Load the persisted snapshot, seeding the demo set when it is empty
    ///
    /// Never fails: a missing, unreadable, or malformed snapshot starts the
    /// store empty, and an empty store is seeded. Individual malformed
    /// records are dropped without affecting the others.
    pub fn initialize(medium: M, clock: C) -> Self {
        let tasks = load_snapshot(&medium).unwrap_or_default();
        let mut store = Self {
            medium,
            clock,
            tasks,
            filter: TaskFilter::default(),
        };

        if store.tasks.is_empty() {
            store.tasks = sample_tasks(store.clock.today(), store.clock.now());
            info!("Seeded {} sample tasks", store.tasks.len());
            store.persist();
        } else {
            debug!("Loaded {} tasks", store.tasks.len());
        }

        store
    }

    /// Replace the in-memory tasks with the persisted snapshot
    ///
    /// Picks up writes made through another handle on the same medium. Keeps
    /// the current tasks when the snapshot is missing or unreadable, and
    /// never seeds. Returns whether the tasks were replaced.
    pub fn reload(&mut self) -> bool {
        match load_snapshot(&self.medium) {
            Some(tasks) => {
                self.tasks = tasks;
                true
            }
            None => false,
        }
    }

    /// Validate and insert a new task
    pub fn add(
        &mut self,
        title: &str,
        due_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Task, AddError> {
        let title = title.trim();
        let due_date = match due_date {
            Some(date) if !title.is_empty() => date,
            _ => return Err(AddError::MissingField),
        };
        if due_date < today {
            return Err(AddError::PastDate);
        }
        if self.tasks.iter().any(|t| !t.completed && t.has_title(title)) {
            return Err(AddError::Duplicate);
        }

        let task = Task::new(title, due_date, self.clock.now());
        self.tasks.push(task.clone());
        self.persist();
        debug!("Added task {} due {}", task.id, task.due_date);
        Ok(task)
    }

    /// Flip the completion flag of a task
    pub fn toggle(&mut self, id: &str) -> Result<Task, ToggleError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("Toggle ignored, no task {}", id);
            return Err(ToggleError::NotFound(id.to_string()));
        };
        task.completed = !task.completed;
        let task = task.clone();
        self.persist();
        debug!("Task {} completed={}", task.id, task.completed);
        Ok(task)
    }

    /// Delete a task
    pub fn remove(&mut self, id: &str) -> Result<(), RemoveError> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!("Remove ignored, no task {}", id);
            return Err(RemoveError::NotFound(id.to_string()));
        };
        self.tasks.remove(index);
        self.persist();
        debug!("Removed task {}", id);
        Ok(())
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks matching the current filter, earliest due date first
    pub fn query(&self) -> Vec<&Task> {
        self.query_with(self.filter)
    }

    /// Same as [`query`](Self::query) with an explicit filter
    pub fn query_with(&self, filter: TaskFilter) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| filter.matches(t)).collect();
        // Stable: equal dates keep insertion order
        tasks.sort_by_key(|t| t.due_date);
        tasks
    }

    /// Pending tasks that are due today, tomorrow, or overdue
    pub fn urgent_pending(&self, today: NaiveDate) -> Vec<&Task> {
        self.query_with(TaskFilter::Pending)
            .into_iter()
            .filter(|t| t.urgency(today) == Urgency::Urgent)
            .collect()
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            pending: total - completed,
            completed,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// JSON text written under [`TASKS_KEY`]
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.tasks)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    /// Write the snapshot; failures leave the store memory-only
    fn persist(&mut self) {
        let content = match self.snapshot() {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize tasks: {}", e);
                return;
            }
        };
        if let Err(e) = self.medium.set(TASKS_KEY, &content) {
            warn!("Storage not available, changes kept in memory only: {}", e);
        }
    }
}

/// Read and parse the snapshot; `None` when absent or unusable
fn load_snapshot<M: PersistenceMedium>(medium: &M) -> Option<Vec<Task>> {
    let raw = match medium.get(TASKS_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read saved tasks: {}", e);
            return None;
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!("Discarding malformed task snapshot: {}", e);
            return None;
        }
    };

    // Bad records are dropped one by one; the rest of the snapshot survives
    let mut seen = HashSet::new();
    let tasks = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!("Dropping malformed task record #{}: {}", index, e);
                None
            }
        })
        .filter(|t| {
            let fresh = seen.insert(t.id.clone());
            if !fresh {
                warn!("Dropping task with duplicate id {}", t.id);
            }
            fresh
        })
        .collect();
    Some(tasks)
}
