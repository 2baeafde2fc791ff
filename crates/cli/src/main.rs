//! School Tasks command line
//!
//! Terminal front end over the task store. Data lives in
//! `<data-dir>/storage.json`.

mod commands;
mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use school_tasks_core::{JsonFileMedium, SystemClock, TaskFilter, TaskStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{
    Config, COLOR_ENV, DATA_DIR_ENV, DEFAULT_URGENT_INTERVAL_SECS, URGENT_INTERVAL_ENV,
};

#[derive(Parser)]
#[command(name = "school-tasks")]
#[command(about = "Track school assignments and their due dates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Seconds between urgent task reminders in `watch`
    #[arg(
        long,
        global = true,
        env = URGENT_INTERVAL_ENV,
        default_value_t = DEFAULT_URGENT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    urgent_interval: u64,

    /// Force colors on or off (yes/no, true/false, on/off, 1/0)
    #[arg(long, global = true, env = COLOR_ENV, value_parser = BoolishValueParser::new())]
    color: Option<bool>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks, earliest due date first
    List {
        /// Which tasks to show: all, pending or completed
        #[arg(short, long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Mark a task completed, or reopen it
    Toggle {
        /// Task ID
        id: String,
    },

    /// Delete a task
    Remove {
        /// Task ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show task counts
    Stats,

    /// Show pending tasks due today, tomorrow or overdue
    Urgent,

    /// Keep running and remind about urgent tasks periodically
    Watch,

    /// Show or switch the color theme
    Theme {
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize tracing; stdout is reserved for rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "school_tasks=info,school_tasks_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::new(cli.data_dir, cli.urgent_interval, cli.color);
    if let Some(color) = config.color {
        colored::control::set_override(color);
    }

    tracing::debug!("Using data directory: {:?}", config.data_dir);
    let medium = JsonFileMedium::in_dir(&config.data_dir);
    let mut store = TaskStore::initialize(medium, SystemClock);

    match cli.command {
        Commands::List { filter } => commands::list(&mut store, filter),
        Commands::Add { title, due } => commands::add(&mut store, &title, due.as_deref()),
        Commands::Toggle { id } => commands::toggle(&mut store, &id),
        Commands::Remove { id, yes } => commands::remove(&mut store, &id, yes),
        Commands::Stats => commands::stats(&store),
        Commands::Urgent => commands::urgent(&store),
        Commands::Watch => commands::watch(&mut store, config.urgent_interval).await,
        Commands::Theme { toggle } => commands::theme(store.medium_mut(), toggle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_interval_default() {
        let cli = Cli::try_parse_from(["school-tasks", "watch"]).unwrap();
        assert_eq!(cli.urgent_interval, DEFAULT_URGENT_INTERVAL_SECS);
    }

    #[test]
    fn test_urgent_interval_rejects_zero() {
        assert!(Cli::try_parse_from(["school-tasks", "watch", "--urgent-interval", "0"]).is_err());
        assert!(Cli::try_parse_from(["school-tasks", "watch", "--urgent-interval", "soon"]).is_err());

        let cli = Cli::try_parse_from(["school-tasks", "watch", "--urgent-interval", "60"]).unwrap();
        assert_eq!(cli.urgent_interval, 60);
    }

    #[test]
    fn test_color_accepts_boolish_values() {
        let cli = Cli::try_parse_from(["school-tasks", "list", "--color", "off"]).unwrap();
        assert_eq!(cli.color, Some(false));

        let cli = Cli::try_parse_from(["school-tasks", "--color", "yes", "stats"]).unwrap();
        assert_eq!(cli.color, Some(true));

        assert!(Cli::try_parse_from(["school-tasks", "stats", "--color", "maybe"]).is_err());
    }

    #[test]
    fn test_add_due_is_optional() {
        let cli = Cli::try_parse_from(["school-tasks", "add", "Math homework"]).unwrap();
        match cli.command {
            Commands::Add { title, due } => {
                assert_eq!(title, "Math homework");
                assert!(due.is_none());
            }
            _ => panic!("expected add"),
        }
    }
}
