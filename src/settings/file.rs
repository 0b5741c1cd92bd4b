//! Settings file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::Settings;
use crate::error::SettingsError;

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let settings = serde_json::from_str(&data)?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut data = serde_json::to_string_pretty(settings)?;
    data.push('\n');
    fs::write(path, data)?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn remove(path: &Path) -> Result<(), SettingsError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[inline]
pub fn path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passmint")
        .join("settings.json")
}
