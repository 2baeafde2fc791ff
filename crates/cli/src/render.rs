//! Terminal rendering of tasks and notices

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use school_tasks_core::{Task, TaskFilter, TaskStats, Urgency};

/// Display format for due dates
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Kind of a one-line message shown after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Info,
    Warning,
    Danger,
}

/// Color choices; dark mode uses the bright variants
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub dark: bool,
}

impl Palette {
    fn tint(self, text: &str, urgency: Option<Urgency>) -> ColoredString {
        match (urgency, self.dark) {
            (Some(Urgency::Urgent), false) => text.red().bold(),
            (Some(Urgency::Urgent), true) => text.bright_red().bold(),
            (Some(Urgency::Near), false) => text.yellow(),
            (Some(Urgency::Near), true) => text.bright_yellow(),
            _ => text.normal(),
        }
    }

    fn notice(self, text: &str, kind: Notice) -> ColoredString {
        match (kind, self.dark) {
            (Notice::Success, false) => text.green(),
            (Notice::Success, true) => text.bright_green(),
            (Notice::Info, false) => text.cyan(),
            (Notice::Info, true) => text.bright_cyan(),
            (Notice::Warning, false) => text.yellow(),
            (Notice::Warning, true) => text.bright_yellow(),
            (Notice::Danger, false) => text.red(),
            (Notice::Danger, true) => text.bright_red(),
        }
    }
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Tier used for tinting; completed tasks are never highlighted
pub fn highlight(task: &Task, today: NaiveDate) -> Option<Urgency> {
    if task.completed {
        return None;
    }
    match task.urgency(today) {
        Urgency::Normal => None,
        tier => Some(tier),
    }
}

pub fn stats_line(stats: TaskStats) -> String {
    format!(
        "{} total · {} pending · {} completed",
        stats.total, stats.pending, stats.completed
    )
}

pub fn task_line(task: &Task, today: NaiveDate, palette: Palette) -> String {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let title = if task.completed {
        task.title.dimmed().strikethrough()
    } else {
        task.title.bold()
    };
    let tier = highlight(task, today);
    let due = palette.tint(&format_due_date(task.due_date), tier);
    let label = match tier {
        Some(Urgency::Urgent) => format!(" {}", palette.tint("urgent", tier)),
        Some(Urgency::Near) => format!(" {}", palette.tint("soon", tier)),
        _ => String::new(),
    };
    format!("{} {}  {}{}  {}", mark, title, due, label, task.id.dimmed())
}

pub fn task_list(
    tasks: &[&Task],
    filter: TaskFilter,
    stats: TaskStats,
    today: NaiveDate,
    palette: Palette,
) -> String {
    let mut out = format!("Tasks ({}) - {}\n", filter, stats_line(stats));
    if tasks.is_empty() {
        out.push_str("No tasks found.\n");
        return out;
    }
    for task in tasks {
        out.push_str(&task_line(task, today, palette));
        out.push('\n');
    }
    out
}

pub fn urgent_message(count: usize) -> Option<String> {
    (count > 0).then(|| format!("Heads up! You have {} urgent task(s) to finish.", count))
}

pub fn print_notice(message: &str, kind: Notice, palette: Palette) {
    println!("{}", palette.notice(message, kind));
}
