//! Logging setup for the application.
//!
//! Installs a global tracing subscriber writing to stdout and a per-launch
//! log file. Filenames carry the launch timestamp and sort chronologically,
//! so pruning keeps the newest files by name alone.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Maximum number of log files to retain.
const MAX_LOG_FILES: usize = 8;
const LOG_FILE_PREFIX: &str = "cardstack";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// A filesystem operation on the log directory failed.
    #[error("Failed to prepare log files in {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to format a timestamp for the log filename.
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    /// Failed to install the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to write to stdout and a per-launch log file.
///
/// Subsequent calls are no-ops. Failures are returned so callers can degrade
/// gracefully without aborting startup.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::logs_dir()?;
    let log_file_name = format_log_file_name(now_local_or_utc())?;
    let log_path = log_dir.join(&log_file_name);
    prune_old_logs(&log_dir, MAX_LOG_FILES - 1)?;

    let file_appender = rolling::never(&log_dir, log_file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let timer = build_timer();
    let stdout_layer = fmt::layer()
        .with_timer(timer.clone())
        .with_writer(std::io::stdout);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(file_writer);

    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(stdout_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging initialized; log file at {}", log_path.display());
    Ok(())
}

/// Remove the oldest launch logs so at most `max_files` remain.
fn prune_old_logs(dir: &Path, max_files: usize) -> Result<(), LoggingError> {
    let map_io = |source: std::io::Error| LoggingError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(map_io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_launch_log(path))
        .collect();
    // Timestamped names sort oldest-first.
    logs.sort();
    let excess = logs.len().saturating_sub(max_files);
    for path in &logs[..excess] {
        fs::remove_file(path).map_err(map_io)?;
    }
    Ok(())
}

fn is_launch_log(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
}

fn format_log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let name = now.format(NAME_FORMAT)?;
    Ok(format!("{LOG_FILE_PREFIX}_{name}.log"))
}

fn build_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn log_filename_has_timestamp_and_prefix() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let name = format_log_file_name(fixed).unwrap();
        assert_eq!(name, "cardstack_2023-11-14_22-13-20.log");
    }

    #[test]
    fn prune_removes_oldest_files_beyond_limit() {
        let dir = tempdir().unwrap();
        for idx in 0..10 {
            let path = dir.path().join(format!("cardstack_2026-01-0{idx}.log"));
            fs::write(&path, b"").unwrap();
        }
        prune_old_logs(dir.path(), 7).unwrap();
        let mut remaining: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        remaining.sort();
        assert_eq!(remaining.len(), 7);
        assert_eq!(remaining[0], "cardstack_2026-01-03.log");
    }

    #[test]
    fn prune_ignores_unrelated_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("cardstack_2026-01-01.log"), b"").unwrap();
        prune_old_logs(dir.path(), 0).unwrap();
        assert!(dir.path().join("notes.txt").exists());
        assert!(!dir.path().join("cardstack_2026-01-01.log").exists());
    }
}
