use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::preferences::AnimationPreferences;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preferences: AnimationPreferences,
    #[serde(default)]
    pub transition: TransitionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Defaults for the page transition split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Total time for the old page to leave and the new one to arrive
    #[serde(default = "default_transition_total")]
    pub total_duration_ms: f64,
    /// Gap (positive) or overlap (negative) between the phases, as a fraction
    /// of one phase
    #[serde(default = "default_transition_spacing")]
    pub spacing_fraction: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            total_duration_ms: default_transition_total(),
            spacing_fraction: default_transition_spacing(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_transition_total() -> f64 {
    280.0
}

fn default_transition_spacing() -> f64 {
    -0.3 // slight overlap
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/zamm/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("zamm")
            .join("config.toml")
    }
}
