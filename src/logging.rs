//! Logging setup for the application.
//!
//! The terminal belongs to the UI, so tracing output goes only to a daily
//! rolling file. `RUST_LOG` wins over the configured filter.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "survey-tui.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("no suitable data directory available for logs")]
    NoDataDir,
    #[error("failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Default log directory under the platform data directory
pub fn default_log_dir() -> Result<PathBuf, LoggingError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("survey-tui").join("logs"))
        .ok_or(LoggingError::NoDataDir)
}

/// Build the filter from `RUST_LOG`, falling back to `configured`
pub fn build_env_filter(configured: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured).map_err(|source| LoggingError::Filter {
        filter: configured.to_string(),
        source,
    })
}

/// Install the file subscriber. Subsequent calls are no-ops.
pub fn init(log_dir: Option<&Path>, filter: &str) -> Result<PathBuf, LoggingError> {
    let dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir()?,
    };
    if LOG_GUARD.get().is_some() {
        return Ok(dir);
    }
    std::fs::create_dir_all(&dir).map_err(|source| LoggingError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let env_filter = build_env_filter(filter)?;
    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(&dir, LOG_FILE_PREFIX));
    let file_layer = fmt::layer().with_ansi(false).with_writer(writer);
    let subscriber = Registry::default().with(env_filter).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    hold_guard(&LOG_GUARD, guard);

    tracing::info!("Logging initialized; log directory {}", dir.display());
    Ok(dir)
}

/// Keep the writer guard for the life of the process. Returns false if the
/// slot was already taken, in which case `guard` is dropped and its writer stops.
fn hold_guard(slot: &OnceLock<WorkerGuard>, guard: WorkerGuard) -> bool {
    match slot.set(guard) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!("Log writer guard already held; new writer will stop");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_reported() {
        // Only meaningful when RUST_LOG is unset, which is the normal test setup
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_env_filter("survey_tui=notalevel").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }

    #[test]
    fn test_valid_filter() {
        assert!(build_env_filter("debug").is_ok());
    }

    #[test]
    fn test_hold_guard_keeps_first() {
        let slot = OnceLock::new();
        let (_, first) = tracing_appender::non_blocking(std::io::sink());
        let (_, second) = tracing_appender::non_blocking(std::io::sink());
        assert!(hold_guard(&slot, first));
        assert!(!hold_guard(&slot, second));
        assert!(slot.get().is_some());
    }

    #[test]
    fn test_unusable_log_dir_is_a_logging_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = init(Some(&file.path().join("logs")), "info").unwrap_err();
        assert!(matches!(err, LoggingError::CreateDir { .. }));
        assert!(err.to_string().starts_with("failed to prepare log directory"));
    }
}
