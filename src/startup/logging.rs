//! File logging.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `<data dir>/specdeck/specdeck.log`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::SystemError;

pub const LOG_ENV: &str = "SPECDECK_LOG";
pub const DEFAULT_FILTER: &str = "specdeck=info";
const LOG_FILE: &str = "specdeck.log";

/// `<data dir>/specdeck`.
pub fn log_dir() -> Result<PathBuf, SystemError> {
    dirs::data_dir()
        .map(|dir| dir.join("specdeck"))
        .ok_or(SystemError::NoDataDirectory)
}

/// Filter from `SPECDECK_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `dir`. Returns the log file path.
pub fn init_logging_in(dir: &Path) -> Result<PathBuf, SystemError> {
    fs::create_dir_all(dir).map_err(|e| SystemError::DirectoryCreationFailed {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| SystemError::IoError {
            operation: "open log file".to_string(),
            path: Some(path.clone()),
            message: e.to_string(),
        })?;

    // A second init (tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(path)
}

/// Install the global subscriber in the default location.
pub fn init_logging() -> Result<PathBuf, SystemError> {
    init_logging_in(&log_dir()?)
}
