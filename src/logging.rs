//! Log file setup.
//!
//! The TUI owns stdout, so events go to a file instead. Filtering follows
//! `HATSTORE_LOG`, then `RUST_LOG`, then `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::StoreConfig;
use crate::error::{classify_io_error, StoreResult, SystemError};

pub const ENV_LOG: &str = "HATSTORE_LOG";
pub const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive from the first variable that is set.
pub fn filter_directive<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_LOG)
        .or_else(|| lookup("RUST_LOG"))
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn build_filter() -> EnvFilter {
    let directive = filter_directive(|key| std::env::var(key).ok());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Create parent directories and open `path` for appending.
pub fn open_log_file(path: &Path) -> StoreResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "open log file"))?;
    Ok(file)
}

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when no data directory exists and no
/// override was given. Fails if a subscriber is already installed.
pub fn init_logging(config: &StoreConfig) -> StoreResult<Option<PathBuf>> {
    let Some(path) = config.resolved_log_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(build_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| SystemError::LoggingInitFailed {
            message: e.to_string(),
        })?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_store_variable() {
        let directive = filter_directive(|key| match key {
            ENV_LOG => Some("hatstore=debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(directive, "hatstore=debug");
    }

    #[test]
    fn test_filter_falls_back_to_rust_log_then_info() {
        let directive = filter_directive(|key| (key == "RUST_LOG").then(|| "trace".to_string()));
        assert_eq!(directive, "trace");
        assert_eq!(filter_directive(|_| None), "info");
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
