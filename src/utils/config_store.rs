//! ConfigStore - Gallery Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use snafu::ResultExt;

use crate::error::{Error, IoSnafu, Result, TomlDeSnafu};

/// File name of the gallery configuration
pub const CONFIG_FILE: &str = "gallery.toml";

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "formkit", "formkit-gui")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::Invalid {
            message: "Could not find a home directory for configuration".to_string(),
        })
}

/// Default location of the gallery config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_config_dir()?.join(CONFIG_FILE))
}

/// Load a TOML config file; a missing file yields the default value
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(T::default());
    }

    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    let config = toml::from_str(&content).context(TomlDeSnafu { path })?;
    Ok(config)
}

/// Save a TOML config file, creating parent directories as needed
pub fn save_config<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(IoSnafu { path: parent })?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).context(IoSnafu { path })?;
    Ok(())
}
