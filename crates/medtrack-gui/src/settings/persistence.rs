//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.medtrack.Medicine-Expiry-Tracker/
//! - Windows: %APPDATA%/medtrack/Medicine Expiry Tracker/config/
//! - Linux: ~/.config/medicineexpirytracker/

use super::Settings;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "medtrack";
const APP_NAME: &str = "Medicine Expiry Tracker";
const CONFIG_FILENAME: &str = "settings.toml";
const DATABASE_FILENAME: &str = "medicine.db";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Path of the medicine database.
///
/// Lives in the platform data directory, or the working directory when that
/// cannot be determined.
pub fn database_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(DATABASE_FILENAME),
        None => {
            tracing::warn!("Could not determine data directory, using working directory");
            PathBuf::from(DATABASE_FILENAME)
        }
    }
}

/// Load settings from disk.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be parsed
/// - The platform-specific directory cannot be determined
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

fn parse_settings(content: &str) -> Settings {
    match toml::from_str(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to parse settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to disk.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_settings(settings: &Settings) -> Result<(), String> {
    let Some(path) = settings_path() else {
        return Err("Could not determine settings path".to_string());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(&path, content).map_err(|e| format!("Failed to write settings file: {}", e))?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}
