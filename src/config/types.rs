use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::navigator::{Section, DEFAULT_DRAWER_TITLE};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,
    /// Title overrides keyed by section key (e.g. `enter_time = "Log Hours"`).
    #[serde(default)]
    pub titles: BTreeMap<String, String>,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Drawer menu layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Section keys in menu order. The first one is shown on a fresh start.
    #[serde(default = "default_menu_items")]
    pub items: Vec<String>,
    /// Title shown while the drawer is open.
    #[serde(default = "default_drawer_title")]
    pub drawer_title: String,
}

/// Where the saved session lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file path. Defaults to the platform data dir.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_menu_items() -> Vec<String> {
    Section::all().iter().map(|s| s.as_str().to_string()).collect()
}

fn default_drawer_title() -> String {
    DEFAULT_DRAWER_TITLE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: default_menu_items(),
            drawer_title: default_drawer_title(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            titles: BTreeMap::new(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
