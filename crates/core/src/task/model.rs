//! Task model definitions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::urgency::{self, Urgency};

/// A school assignment (stored format shared with the browser app)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(rename = "date")]
    pub due_date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with a fresh id
    pub fn new(title: impl Into<String>, due_date: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            due_date,
            completed: false,
            created_at,
        }
    }

    /// Mark as completed
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Urgency tier of the due date
    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        urgency::classify(self.due_date, today)
    }

    /// Whether `title` names this task, ignoring case and surrounding whitespace
    pub fn has_title(&self, title: &str) -> bool {
        self.title.trim().to_lowercase() == title.trim().to_lowercase()
    }
}

/// View selector for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown filter `{}`", other)),
        }
    }
}

/// Counts shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_task() {
        let task = Task::new("Math homework", day(2024, 6, 12), Utc::now());
        assert_eq!(task.title, "Math homework");
        assert!(!task.completed);
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("A", day(2024, 6, 12), Utc::now());
        let b = Task::new("A", day(2024, 6, 12), Utc::now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_has_title_ignores_case_and_padding() {
        let task = Task::new("Math Homework", day(2024, 6, 12), Utc::now());
        assert!(task.has_title("  math homework "));
        assert!(!task.has_title("math homework 2"));
    }

    #[test]
    fn test_wire_format() {
        let created_at = DateTime::parse_from_rfc3339("2024-06-10T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut task = Task::new("History essay", day(2024, 6, 17), created_at);
        task.id = "abc".to_string();

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["title"], "History essay");
        assert_eq!(value["date"], "2024-06-17");
        assert_eq!(value["completed"], false);
        assert!(value["createdAt"].as_str().unwrap().starts_with("2024-06-10T08:30:00"));
    }

    #[test]
    fn test_parses_browser_record() {
        let raw = r#"{
            "id": "1718000000000k3j9x2a1b",
            "title": "Estudar para prova",
            "date": "2024-06-12",
            "completed": true,
            "createdAt": "2024-06-10T14:03:11.512Z"
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, "1718000000000k3j9x2a1b");
        assert_eq!(task.due_date, day(2024, 6, 12));
        assert!(task.completed);
    }

    #[test]
    fn test_rejects_record_missing_date() {
        let raw = r#"{"id": "1", "title": "x", "completed": false, "createdAt": "2024-06-10T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("Pending".parse::<TaskFilter>().unwrap(), TaskFilter::Pending);
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert!("done".parse::<TaskFilter>().is_err());
    }
}
