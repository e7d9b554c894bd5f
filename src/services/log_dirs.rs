//! Log file location
//!
//! Logs go to the system temp directory unless `--log-file` says otherwise.
//! Each run uses a PID-based file name so concurrent runs do not share one.

use std::path::PathBuf;

const LOG_PREFIX: &str = "article-customizer";

/// Directory holding log files
pub fn log_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Log file path for the current process
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("{}-{}.log", LOG_PREFIX, std::process::id()))
}
