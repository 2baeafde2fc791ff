//! Command handlers
//!
//! Every handler forwards one user action to the store and then re-queries
//! the store to render the result.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use school_tasks_core::urgency::parse_due_date;
use school_tasks_core::{
    preferences, AddError, Clock, JsonFileMedium, SystemClock, TaskFilter, TaskStore,
};
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::render::{self, Notice, Palette};

pub type Store = TaskStore<JsonFileMedium, SystemClock>;

/// Delay before the first urgent check in `watch`
const FIRST_CHECK_DELAY: Duration = Duration::from_secs(2);

pub fn palette(store: &Store) -> Palette {
    Palette {
        dark: preferences::dark_mode(store.medium()),
    }
}

fn show_list(store: &Store) {
    let today = store.clock().today();
    print!(
        "{}",
        render::task_list(
            &store.query(),
            store.filter(),
            store.stats(),
            today,
            palette(store),
        )
    );
}

pub fn list(store: &mut Store, filter: TaskFilter) -> Result<ExitCode> {
    store.set_filter(filter);
    show_list(store);
    Ok(ExitCode::SUCCESS)
}

/// Due date for `add`: the `--due` value, or today when it is absent
fn resolve_due_date(due: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match due {
        Some(raw) => match parse_due_date(raw) {
            Some(date) => Ok(date),
            None => bail!("Invalid due date `{}`, expected YYYY-MM-DD", raw),
        },
        None => Ok(today),
    }
}

pub fn add(store: &mut Store, title: &str, due: Option<&str>) -> Result<ExitCode> {
    let today = store.clock().today();
    let due_date = resolve_due_date(due, today)?;

    let palette = palette(store);
    match store.add(title, Some(due_date), today) {
        Ok(task) => {
            render::print_notice("Task added.", Notice::Success, palette);
            debug!("Created {}", task.id);
            show_list(store);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let kind = match e {
                AddError::MissingField => Notice::Danger,
                AddError::PastDate | AddError::Duplicate => Notice::Warning,
            };
            render::print_notice(&e.to_string(), kind, palette);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub fn toggle(store: &mut Store, id: &str) -> Result<ExitCode> {
    let palette = palette(store);
    match store.toggle(id) {
        Ok(task) if task.completed => {
            render::print_notice("Task completed! Well done!", Notice::Success, palette);
        }
        Ok(_) => render::print_notice("Task reopened.", Notice::Info, palette),
        Err(e) => {
            render::print_notice(&e.to_string(), Notice::Warning, palette);
            return Ok(ExitCode::FAILURE);
        }
    }
    show_list(store);
    Ok(ExitCode::SUCCESS)
}

pub fn remove(store: &mut Store, id: &str, assume_yes: bool) -> Result<ExitCode> {
    let palette = palette(store);
    let Some(task) = store.get(id) else {
        render::print_notice(&format!("Task not found: {}", id), Notice::Warning, palette);
        return Ok(ExitCode::FAILURE);
    };

    if !assume_yes {
        let prompt = format!("Delete \"{}\"?", task.title);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            render::print_notice("Nothing deleted.", Notice::Info, palette);
            return Ok(ExitCode::SUCCESS);
        }
    }

    if let Err(e) = store.remove(id) {
        render::print_notice(&e.to_string(), Notice::Warning, palette);
        return Ok(ExitCode::FAILURE);
    }
    render::print_notice("Task deleted.", Notice::Info, palette);
    show_list(store);
    Ok(ExitCode::SUCCESS)
}

pub fn stats(store: &Store) -> Result<ExitCode> {
    println!("{}", render::stats_line(store.stats()));
    Ok(ExitCode::SUCCESS)
}

/// Print the urgent reminder; returns the number of urgent tasks
fn report_urgent(store: &Store) -> usize {
    let urgent = store.urgent_pending(store.clock().today());
    if let Some(message) = render::urgent_message(urgent.len()) {
        render::print_notice(&message, Notice::Warning, palette(store));
        for task in &urgent {
            println!("  {}", render::task_line(task, store.clock().today(), palette(store)));
        }
    }
    urgent.len()
}

pub fn urgent(store: &Store) -> Result<ExitCode> {
    if report_urgent(store) == 0 {
        println!("No urgent tasks.");
    }
    Ok(ExitCode::SUCCESS)
}

/// Re-check urgent tasks periodically until interrupted
pub async fn watch(store: &mut Store, period: Duration) -> Result<ExitCode> {
    info!("Checking urgent tasks every {}s", period.as_secs());
    let mut ticker = interval_at(Instant::now() + FIRST_CHECK_DELAY, period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                store.reload();
                let count = report_urgent(store);
                debug!("Urgent check found {} task(s)", count);
            }
            result = tokio::signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl-C")?;
                info!("Stopping urgent task reminder");
                break;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn theme(medium: &mut JsonFileMedium, toggle: bool) -> Result<ExitCode> {
    let dark = if toggle {
        preferences::toggle_dark_mode(medium)
    } else {
        preferences::dark_mode(&*medium)
    };
    let name = if dark { "dark" } else { "light" };
    let kind = if toggle { Notice::Success } else { Notice::Info };
    render::print_notice(
        &format!("Theme: {}", name),
        kind,
        Palette { dark },
    );
    Ok(ExitCode::SUCCESS)
}
