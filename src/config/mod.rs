pub mod settings;
pub mod user;

pub use settings::ClassifierSettings;
pub use user::{load_user_config, user_config_path};

use std::path::Path;

use crate::error::SniffResult;

/// Resolve the settings to run with.
///
/// An explicit path must exist and parse. Without one, the user config is
/// used if present, otherwise defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> SniffResult<ClassifierSettings> {
    match explicit {
        Some(path) => ClassifierSettings::load(path),
        None => Ok(load_user_config()?.unwrap_or_default()),
    }
}
