//! Platform directories for config, session data, and logs.

use crate::error::ApiError;
use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "clinview";

fn project_dirs() -> Result<ProjectDirs, ApiError> {
    ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ApiError::ConfigError("Could not determine a home directory".to_string())
    })
}

/// `$XDG_CONFIG_HOME/clinview`, falling back to `~/.config/clinview`.
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
    }
    std::env::var("HOME")
        .ok()
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
}

/// Directory holding the persisted login session.
pub fn data_dir() -> Result<PathBuf, ApiError> {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(APP_NAME));
        }
    }
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// Directory for log files. Uses the state dir where the platform has one.
pub fn state_dir() -> Result<PathBuf, ApiError> {
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(APP_NAME));
        }
    }
    let dirs = project_dirs()?;
    Ok(dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dirs.data_local_dir().to_path_buf()))
}
