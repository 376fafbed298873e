//! File logging for the TUI
//!
//! Stdout belongs to the terminal UI, so tracing output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Error;

/// Directory holding the log file, `~/.currency-converter`
pub fn log_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".currency-converter");
    path
}

/// Default log file path
pub fn default_log_path() -> PathBuf {
    log_dir().join("tui.log")
}

/// Log file in the working directory, used when the home location is unusable
pub fn fallback_log_path() -> PathBuf {
    PathBuf::from("tui.log")
}

/// Paths tried in order; an explicit path is never replaced
fn log_candidates(path: Option<PathBuf>) -> Vec<PathBuf> {
    match path {
        Some(path) => vec![path],
        None => vec![default_log_path(), fallback_log_path()],
    }
}

fn open_append(path: &Path) -> Result<File, Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Open the first candidate that can be created for appending
pub fn open_log_file(candidates: &[PathBuf]) -> Result<(PathBuf, File), Error> {
    let mut last_error = None;
    for candidate in candidates {
        match open_append(candidate) {
            Ok(file) => return Ok((candidate.clone(), file)),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| Error::Other("No log file location".to_string())))
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "currency_converter=debug,warn"
    } else {
        "currency_converter=info,warn"
    }
}

/// Install a global tracing subscriber that appends to `path`.
///
/// Without an explicit path this writes under `~/.currency-converter`, falling
/// back to the working directory. Returns the path actually used.
pub fn init_file_logger(path: Option<PathBuf>, debug: bool) -> Result<PathBuf, Error> {
    let (log_path, file) = open_log_file(&log_candidates(path))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::Other(format!("Failed to install logger: {}", e)))?;

    Ok(log_path)
}
