//! Process configuration read from the environment.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - Every field has a usable default except `log_dir`, which disables
//!   file logging when absent.

use crate::logging::default_log_level;
use crate::publish::DEFAULT_TASK_QUEUE;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "TECHGEN_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TECHGEN_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TECHGEN_LOG_DIR";
pub const ENV_TASK_QUEUE: &str = "TECHGEN_TASK_QUEUE";

const DEFAULT_DB_FILE: &str = "techgen.sqlite3";

/// Runtime settings shared by the boundary and CLI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` keeps logging off.
    pub log_dir: Option<PathBuf>,
    /// Routing key for task-created messages.
    pub task_queue: String,
}

impl AppConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE)),
            log_level: read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            task_queue: read(ENV_TASK_QUEUE).unwrap_or_else(|| DEFAULT_TASK_QUEUE.to_string()),
        }
    }
}
