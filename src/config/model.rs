//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Entrance/shimmer animations. Off skips straight to settled values.
    #[serde(default = "default_true")]
    pub animations: bool,
    /// Play the splash sequence at startup.
    #[serde(default = "default_true")]
    pub splash: bool,
    /// Event-loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animations: true,
            splash: true,
            tick_rate_ms: default_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds.
    #[serde(default = "default_toast_duration")]
    pub duration_ms: u64,
    /// Most toasts shown at once; the oldest is evicted beyond this.
    #[serde(default = "default_toast_max")]
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration(),
            max_visible: default_toast_max(),
        }
    }
}

/// Simulated network delays, in milliseconds. Kept in config so tests and
/// impatient users can zero them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_initial_load_ms")]
    pub initial_load_ms: u64,
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    #[serde(default = "default_post_ms")]
    pub post_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            initial_load_ms: default_initial_load_ms(),
            refresh_ms: default_refresh_ms(),
            post_ms: default_post_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log directory; defaults to `<data_dir>/skillswap/logs`.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    50
}

fn default_toast_duration() -> u64 {
    3000
}

fn default_toast_max() -> usize {
    5
}

fn default_login_ms() -> u64 {
    1000
}

fn default_initial_load_ms() -> u64 {
    1500
}

fn default_refresh_ms() -> u64 {
    1000
}

fn default_post_ms() -> u64 {
    400
}
