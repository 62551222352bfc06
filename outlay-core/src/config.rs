//! Configuration management
//!
//! settings.json format:
//! ```json
//! {
//!   "app": { "currency": "$", "defaultUsername": "bob" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    default_username: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_username: None,
            other: HashMap::new(),
        }
    }
}

fn default_currency() -> String {
    "$".to_string()
}

/// Outlay configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol prefixed to money amounts in human output (display only)
    pub currency: String,
    /// Username used when the caller specifies none
    pub default_username: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_username: None,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Settings are advisory: a missing or malformed file falls back to
    /// defaults rather than failing.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            currency: raw.app.currency.clone(),
            default_username: raw.app.default_username.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves settings fields this crate doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Update only the fields we manage
        settings.app.currency = self.currency.clone();
        settings.app.default_username = self.default_username.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
