//! Settings loading from the file system.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::error::KeymodeError;

use super::types::Settings;

/// Default location of the settings file.
pub fn default_settings_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/.keymode/settings.json").as_ref())
}

/// Strict variant of [`load_settings`]: surfaces read and parse failures.
pub fn try_load_settings(path: &Path) -> Result<Settings, KeymodeError> {
    let raw = std::fs::read_to_string(path).map_err(|source| KeymodeError::SettingsRead {
        path: path.display().to_string(),
        source,
    })?;
    let settings = serde_json::from_str::<Settings>(&raw)?;
    Ok(settings)
}

/// Load settings from `path`, or the default location when `None`.
///
/// Returns `Settings::default()` when the file is missing or unreadable;
/// a missing settings file is the normal first-run state, not an error.
#[instrument(name = "load_settings", skip_all)]
pub fn load_settings(path: Option<&Path>) -> Settings {
    let default_path = default_settings_path();
    let path = path.unwrap_or(&default_path);

    if !path.exists() {
        info!(path = %path.display(), "Settings file not found, using defaults");
        return Settings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!(path = %path.display(), "Loaded settings");
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load settings, using defaults");
            Settings::default()
        }
    }
}
