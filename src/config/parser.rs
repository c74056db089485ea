//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Result, WalkerError};
use crate::models::config::PartialSettings;

use super::file::DEFAULT_CONFIG_FILE;

/// Log levels accepted in configuration
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WalkerError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| WalkerError::ConfigRead {
        path: path.to_path_buf(),
        source: Arc::new(e),
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| WalkerError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(root_path) = &settings.root_path {
        if root_path.as_os_str().is_empty() {
            return Err(WalkerError::config_error(format!(
                "Invalid empty root_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(WalkerError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(level) = &settings.log_level {
        if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            return Err(WalkerError::config_error(format!(
                "Invalid log_level '{}' in config file: {}. Expected one of: {}",
                level,
                path.display(),
                LOG_LEVELS.join(", ")
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations, starting in the
/// current directory
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let current_dir = std::env::current_dir().map_err(WalkerError::io_error)?;
    find_default_config_in(&current_dir)
}

/// Find and load configuration from `dir`, the home directory, or the user
/// config directory, in that order
pub fn find_default_config_in(dir: &Path) -> Result<Option<PartialSettings>> {
    for candidate in default_config_locations(dir) {
        if candidate.is_file() {
            return Ok(Some(parse_config_file(candidate)?));
        }
    }

    Ok(None)
}

fn default_config_locations(dir: &Path) -> Vec<PathBuf> {
    let mut locations = vec![dir.join(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("depwalker").join("config.toml"));
    }

    locations
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(WalkerError::io_error)?;
        }
    }

    fs::write(path, include_str!("default_config.toml")).map_err(WalkerError::io_error)?;

    Ok(())
}
