//! Diagnostics for a one-shot run.
//!
//! Stdout carries the saved asset paths and stderr the single failure line,
//! so tracing events go to `$XDG_STATE_HOME/evimg/evimg.log`. When that file
//! is unavailable, events are dropped unless `RUST_LOG` asks for them, in
//! which case they go to stderr.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "evimg.log";

/// Filter for the log file when `RUST_LOG` is unset.
const FILE_FILTER: &str = "info,evimg_core=debug,evimg_cli=debug";

/// `RUST_LOG` wins; otherwise `fallback`.
fn filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Location of the log file, creating its directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("evimg")?;
    xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create log directory")
}

/// Appends run events to the log file. Returns its path.
///
/// Errors leave no subscriber installed, so the caller can try [`init_quiet`].
pub fn init_file_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {}", e))?;

    tracing::debug!(pid = std::process::id(), "run started");
    Ok(path)
}

/// Subscriber for runs without a log file: silent by default, stderr when `RUST_LOG` is set.
pub fn init_quiet() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("off"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
