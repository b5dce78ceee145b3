//! File logging.
//!
//! The terminal UI owns stdout, so logs only go to a file, and only when
//! one is configured. Filtering follows `CHATLINE_LOG` (an `EnvFilter`
//! directive), defaulting to `info`, or `debug` with `--verbose`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "CHATLINE_LOG";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the program or buffered lines are lost.
pub fn init(log_path: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let log_path = log_path?;

    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty())
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("Failed to create log directory: {e}");
        return None;
    }

    let file = match fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file: {e}");
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
        return None;
    }

    LOG_PATH.set(log_path.to_path_buf()).ok();

    tracing::info!(path = %log_path.display(), "Logging initialized");

    Some(guard)
}

pub fn log_file_path() -> Option<&'static PathBuf> {
    LOG_PATH.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_no_logging() {
        assert!(init(None, true).is_none());
        assert!(log_file_path().is_none());
    }

    #[test]
    fn verbose_switches_directive() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }
}
