// Chunk: docs/chunks/file_logging - Structured logging to a file
//!
//! Log setup.
//!
//! The terminal belongs to the UI, so log lines go to
//! `<data_dir>/noots/noots.log` instead of stderr. `NOOTS_LOG` takes an
//! `EnvFilter` directive string and overrides the build-dependent default.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NOOTS_LOG";

/// Where the log file lives, if a data directory exists.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("noots").join("noots.log"))
}

/// Filter used when `NOOTS_LOG` is unset or invalid.
pub fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "noots=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Logging is silently disabled when the log
/// file cannot be opened.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;
    Some(path)
}
