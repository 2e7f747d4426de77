//! Tracing setup
//!
//! The TUI owns the terminal, so it only ever logs to a file. Line mode may
//! log warnings to stderr.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to this file
    File(PathBuf),
    /// Warnings and errors on stderr
    Stderr,
    /// No subscriber at all
    Off,
}

/// `RUST_LOG` if set, otherwise `default`
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Split a log path into the directory and file name the appender wants
fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(file_name)))
}

/// Install the global subscriber
///
/// Keep the returned guard alive until exit so buffered file output is
/// flushed.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init(target: &LogTarget) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Off => Ok(None),
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter("warn"))
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter("info"))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();

            tracing::info!("Logging to {}", path.display());
            Ok(Some(guard))
        }
    }
}
