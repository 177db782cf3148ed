//! Logging init: append to a file under the XDG state dir, or stderr if that fails.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,jarsub=debug,jarsub_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file under `$XDG_STATE_HOME/jarsub/`; creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jarsub")?;
    Ok(xdg_dirs.place_state_file("jarsub.log")?)
}

fn open_append(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Plain-text subscriber writing every event to `file`.
fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
}

/// Initialize structured logging to `~/.local/state/jarsub/jarsub.log`.
/// Returns Err if the file cannot be opened so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::info!("jarsub logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when `init_logging()` fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_appended_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jarsub.log");
        fs::write(&path, "earlier run\n").unwrap();

        let subscriber = file_subscriber(open_append(&path).unwrap(), EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(jar_id = "ab12_job.jar", "jar uploaded");
            tracing::debug!("below the filter");
        });

        let log = fs::read_to_string(&path).unwrap();
        assert!(log.starts_with("earlier run\n"));
        assert!(log.contains("jar uploaded"));
        assert!(log.contains("jar_id=\"ab12_job.jar\""));
        assert!(!log.contains("below the filter"));
        assert!(!log.contains('\u{1b}'));
    }

    #[test]
    fn unopenable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_append(dir.path()).is_err());
    }
}
