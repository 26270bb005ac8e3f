use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::history::MAX_HISTORY_SIZE;

fn default_history_limit() -> usize {
    MAX_HISTORY_SIZE
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Maximum number of undoable edits kept per settings session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Profile file location (defaults to the platform data directory)
    #[serde(default)]
    pub profile_path: Option<PathBuf>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            profile_path: None,
        }
    }
}

/// Runtime configuration
#[derive(Debug)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

impl AppConfig {
    /// Profile file to use, falling back to the platform default
    pub fn profile_path(&self) -> PathBuf {
        self.data
            .profile_path
            .clone()
            .unwrap_or_else(crate::paths::profile_file)
    }
}

/// Result of loading config from disk
pub struct LoadConfigResult {
    pub config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from the platform config file
pub fn load_config() -> LoadConfigResult {
    load_config_from(&crate::paths::config_file())
}

/// Load configuration from a specific file.
///
/// A missing file yields defaults and marks the config dirty so it gets written out.
pub fn load_config_from(config_path: &Path) -> LoadConfigResult {
    let (data, reset_reason, dirty) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None, false)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                        false,
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                    false,
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None, true)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path: config_path.to_path_buf(),
            dirty,
        },
        reset_reason,
    }
}

/// Save configuration to disk if it has unsaved changes
pub fn save_config(config: &mut AppConfig) {
    if !config.dirty {
        return;
    }

    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
                config.dirty = false;
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}
