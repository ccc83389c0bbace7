//! Settings Manager
//!
//! Resolves the platform configuration directory and loads the application
//! [`Config`] from it.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "labelkit";
const CONFIG_FILES: [&str; 2] = ["config.toml", "config.json"];

/// Locates and loads configuration files
pub struct SettingsManager;

impl SettingsManager {
    /// Platform configuration directory for LabelKit
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load the configuration from the platform directory.
    ///
    /// Missing files yield defaults. Environment overrides are applied last.
    pub fn load() -> SettingsResult<Config> {
        let mut config = match Self::config_dir() {
            Ok(dir) => Self::load_from_dir(&dir)?,
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Config::default()
            }
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load `config.toml` or `config.json` from `dir`, defaults if neither exists.
    pub fn load_from_dir(dir: &Path) -> SettingsResult<Config> {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.is_file() {
                tracing::info!("Loading configuration from {}", path.display());
                return Config::load_from_file(&path);
            }
        }
        tracing::debug!("No configuration file in {}", dir.display());
        Ok(Config::default())
    }

    /// Directory that holds the session blob.
    pub fn storage_dir(config: &Config) -> SettingsResult<PathBuf> {
        match &config.storage.directory {
            Some(dir) => Ok(dir.clone()),
            None => Self::config_dir(),
        }
    }
}
