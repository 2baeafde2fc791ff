//! Runtime configuration
//!
//! Every setting is a global command line flag that falls back to an
//! environment variable (see the `env` attributes on `Cli`).

use std::path::PathBuf;
use std::time::Duration;

pub const DATA_DIR_ENV: &str = "SCHOOL_TASKS_DATA_DIR";
pub const URGENT_INTERVAL_ENV: &str = "SCHOOL_TASKS_URGENT_INTERVAL_SECS";
pub const COLOR_ENV: &str = "SCHOOL_TASKS_COLOR";

pub const DEFAULT_URGENT_INTERVAL_SECS: u64 = 5 * 60;
const DEFAULT_DATA_DIR: &str = ".school-tasks";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Period of the urgent task reminder in `watch`
    pub urgent_interval: Duration,
    /// Forced color setting; `None` lets the terminal decide
    pub color: Option<bool>,
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>, urgent_interval_secs: u64, color: Option<bool>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            urgent_interval: Duration::from_secs(urgent_interval_secs),
            color,
        }
    }
}
