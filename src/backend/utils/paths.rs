//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "ECOSPECHE";

/// Get the base data directory (`ECOSPECHE`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("XDG_DATA_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".local/share"))
            })
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Get the directory holding the persisted session.
#[inline]
pub fn get_session_dir() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("session"))
}

/// Get the default configuration file path.
#[inline]
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.json"))
}
