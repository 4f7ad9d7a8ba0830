pub mod settings;

pub use settings::{GitSettings, OutputSettings, Settings, ShellSettings};

use crate::errors::{Result, StackedError};
use std::path::{Path, PathBuf};

/// Get the configuration directory (~/.for-each-stacked/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| StackedError::config("Could not find home directory"))?;
    Ok(home_dir.join(".for-each-stacked"))
}

/// Get the default settings file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.json"))
}

/// Load and validate settings, from `explicit` when given or the default location otherwise.
///
/// An explicitly requested file must exist; the default file is optional.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let settings = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(StackedError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Settings::load_from_file(path)?
        }
        None => Settings::load_from_file(&default_config_path()?)?,
    };

    settings.validate()?;
    tracing::debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}
