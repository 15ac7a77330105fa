use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::navigator::{MenuIndex, MenuItem, Section};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/flyout-nav/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flyout-nav").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every menu item and title override names a known section
    /// - No section appears twice in the menu
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for key in &self.menu.items {
            let Some(section) = Section::parse(key) else {
                return Err(ConfigError::ValidationError {
                    message: format!("Menu item '{}' is not a known section", key),
                });
            };
            if !seen.insert(section) {
                return Err(ConfigError::ValidationError {
                    message: format!("Menu item '{}' is listed more than once", key),
                });
            }
        }

        if let Some(key) = self.titles.keys().find(|k| Section::parse(k).is_none()) {
            return Err(ConfigError::ValidationError {
                message: format!("Title override '{}' is not a known section", key),
            });
        }

        Ok(())
    }

    /// Path of the saved-session file.
    pub fn session_path(&self) -> PathBuf {
        self.session.path.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("flyout-nav").join("session.json")
        })
    }

    /// Build the drawer menu. Unknown keys are skipped; call `validate` first
    /// to reject them instead.
    pub fn menu_index(&self) -> MenuIndex {
        let items = self
            .menu
            .items
            .iter()
            .filter_map(|key| Section::parse(key))
            .map(|section| MenuItem {
                id: section.menu_id(),
                section,
                title: self
                    .titles
                    .get(section.as_str())
                    .cloned()
                    .unwrap_or_else(|| section.default_title().to_string()),
            })
            .collect();
        MenuIndex::new(items)
    }
}
