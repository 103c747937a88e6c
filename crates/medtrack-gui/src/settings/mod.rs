//! User preferences for the Medicine Expiry Tracker.
//!
//! Only presentation preferences live here. The database file location is
//! fixed (see [`database_path`]).

mod persistence;

pub use persistence::{database_path, load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
}

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// Start the main window in fullscreen.
    pub fullscreen: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            fullscreen: true,
        }
    }
}
