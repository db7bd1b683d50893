//! Preview configuration persistence
//!
//! Stores user preferences in `~/.config/markup-preview/config.yaml`
//! (`%APPDATA%\markup-preview\config.yaml` on Windows). Logs go to the
//! `logs/` directory next to it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::markup::ListWrapping;

const APP_DIR: &str = "markup-preview";

/// Preview configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Base file name shown when the name field is blank
    #[serde(default = "default_file_name")]
    pub default_file_name: String,

    /// Target size used when the size field holds no number
    #[serde(default = "default_target_size_mb")]
    pub default_target_size_mb: f64,

    /// How consecutive list items are grouped in the markup preview
    #[serde(default)]
    pub list_wrapping: ListWrapping,
}

fn default_file_name() -> String {
    "bluebeam_document".to_string()
}

fn default_target_size_mb() -> f64 {
    10.0
}

/// Directory holding the config file; `XDG_CONFIG_HOME` is honoured on Unix
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
            default_target_size_mb: default_target_size_mb(),
            list_wrapping: ListWrapping::default(),
        }
    }
}

impl PreviewConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
