use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

/// Where preferences are persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Preference file. Defaults to `<data_dir>/emojishelf/preferences.toml`.
    pub prefs_path: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    pub level: String,
    /// Log file. Defaults to `<data_dir>/emojishelf/emojishelf.log`.
    pub file: Option<PathBuf>,
}

/// Terminal front end settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    pub tick_ms: u64,
    /// How long a click message stays in the footer (default: 1500).
    pub toast_ms: u64,
    /// Columns in the grid layout (default: 3).
    pub grid_columns: u16,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            toast_ms: 1500,
            grid_columns: 3,
        }
    }
}
