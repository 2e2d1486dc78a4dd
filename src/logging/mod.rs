//! File-backed logging.
//!
//! The terminal is owned by the TUI, so nothing may write to stdout while the
//! app runs. Tracing output goes to a dated file under the configured log
//! directory (default: `<data_dir>/skillswap/logs/`). Posted skill offers are
//! recorded through the same subscriber; "posting" never persists anywhere
//! else.

use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skillswap")
        .join("logs")
}

/// Install the global tracing subscriber writing to `skillswap_<date>.log`.
/// No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("skillswap_{date}.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    info!("skillswap started");
    Ok(())
}

/// Record a created skill offer. This is the whole of "posting": the offer is
/// logged and then forgotten.
pub fn log_created_offer(skill: &str, category: &str, description: &str) {
    info!(skill, category, description, "create post");
}
