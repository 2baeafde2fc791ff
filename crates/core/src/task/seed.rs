//! Demo tasks written on first run

use chrono::{DateTime, Days, NaiveDate, Utc};

use super::model::Task;

/// (title, days after today, completed)
const SAMPLE_TASKS: &[(&str, u64, bool)] = &[
    ("Hand in History essay on World War II", 7, false),
    ("Study for Math test - Geometry", 2, false),
    ("Present Biology seminar on ecosystems", 10, true),
    ("Submit Web Development project", 4, false),
    ("Portuguese exercises - pages 45 to 50", 1, false),
    ("Research the Industrial Revolution for project", 14, false),
];

/// Number of tasks in the demo set
pub const SAMPLE_TASK_COUNT: usize = SAMPLE_TASKS.len();

pub(crate) fn sample_tasks(today: NaiveDate, now: DateTime<Utc>) -> Vec<Task> {
    SAMPLE_TASKS
        .iter()
        .map(|&(title, offset, completed)| {
            let due = today.checked_add_days(Days::new(offset)).unwrap_or(today);
            let task = Task::new(title, due, now);
            if completed {
                task.completed()
            } else {
                task
            }
        })
        .collect()
}
