//! Application configuration
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Rendering service settings (base URL, timeout, user agent)
//! - Storage settings (session directory, blob key)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`ServiceSettings::base_url`]
pub const SERVICE_URL_ENV: &str = "LABELKIT_SERVICE_URL";

/// Rendering service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Base URL of the rendering service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            user_agent: format!("labelkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceSettings {
    /// Base URL without surrounding whitespace or a trailing slash
    pub fn normalized_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

/// Session storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the session blob; the config directory when unset
    pub directory: Option<PathBuf>,
    /// Name of the session blob
    pub blob_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: None,
            blob_key: "label_session".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Rendering service settings
    pub service: ServiceSettings,
    /// Storage settings
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::LoadError(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::SaveError(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let url = self.service.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::invalid(
                "service.base_url",
                format!("'{url}' is not an http(s) URL"),
            ));
        }

        if self.service.timeout_secs == 0 {
            return Err(SettingsError::invalid(
                "service.timeout_secs",
                "timeout must be > 0",
            ));
        }

        if self.storage.blob_key.trim().is_empty() {
            return Err(SettingsError::invalid(
                "storage.blob_key",
                "blob key must not be empty",
            ));
        }

        Ok(())
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            self.apply_service_url(url);
        }
    }

    fn apply_service_url(&mut self, url: String) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::debug!("Service URL overridden by {}", SERVICE_URL_ENV);
            self.service.base_url = url.to_string();
        }
    }
}
