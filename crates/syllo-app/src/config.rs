//! Settings parser for the user-level config.toml
//!
//! The bearer token and backend URL are explicit configuration injected into
//! the service client at startup; there is no ambient key-value store.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use syllo_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "syllo-console";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL of the search backend
    pub base_url: String,
    /// Bearer token for the authenticated endpoints (deploy, logs)
    pub token: Option<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

/// Log poller settings
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollSettings {
    /// Fixed period between log fetches, in seconds
    pub interval_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

/// All user settings
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendSettings,
    pub poll: PollSettings,
}

impl Settings {
    /// Load settings from the default location
    /// (`<config dir>/syllo-console/config.toml`).
    ///
    /// A missing file yields defaults. A malformed file is logged and also
    /// yields defaults; a broken config must never keep the console from
    /// starting.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from an explicit path (used by `--config` and tests)
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        match try_load(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

fn try_load(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::config(e.to_string()))
}

/// Default config file location under the user config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}
