//! User configuration loading for codesniff.
//!
//! User config location: $XDG_CONFIG_HOME/codesniff/codesniff.toml
//! Fallback: the platform config directory (e.g. ~/.config/codesniff/codesniff.toml)

use std::path::PathBuf;

use log::debug;

use super::ClassifierSettings;
use crate::error::SniffResult;

const APP_DIR: &str = "codesniff";
const CONFIG_FILE: &str = "codesniff.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set and non-empty: $XDG_CONFIG_HOME/codesniff/codesniff.toml
/// 2. Otherwise: the platform config directory from `dirs`
///
/// Returns None if neither can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the user configuration file.
///
/// A missing file is not an error and yields `Ok(None)`.
/// A file that exists but cannot be read or parsed is an error.
pub fn load_user_config() -> SniffResult<Option<ClassifierSettings>> {
    let Some(path) = user_config_path() else {
        debug!(target: "codesniff::config", "No user config directory");
        return Ok(None);
    };
    if !path.exists() {
        debug!(target: "codesniff::config", "No user config at {}", path.display());
        return Ok(None);
    }
    ClassifierSettings::load(&path).map(Some)
}
