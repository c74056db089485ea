//! Settings validation

use std::path::Path;

use crate::error::{Result, WalkerError};
use crate::models::config::Settings;
use crate::parsers::package_json::PACKAGE_JSON;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        Self::validate_root_path(&settings.root_path)?;

        if settings.quiet && settings.verbose {
            return Err(WalkerError::config_error(
                "quiet and verbose output cannot both be enabled",
            ));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The root must be a package directory
    fn validate_root_path(path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(WalkerError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        if !path.join(PACKAGE_JSON).is_file() {
            return Err(WalkerError::config_error(format!(
                "No {} found in {}",
                PACKAGE_JSON,
                path.display()
            )));
        }

        Ok(())
    }

    /// The directory an output file goes into has to exist already
    fn validate_output_path(path: &Path) -> Result<()> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };

        if parent.as_os_str().is_empty() {
            return Ok(());
        }

        if !parent.is_dir() {
            return Err(WalkerError::OutputDirectoryNotFound {
                path: parent.to_path_buf(),
            });
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(parent).map_err(WalkerError::io_error)?;
            if metadata.permissions().mode() & 0o200 == 0 {
                return Err(WalkerError::permission_denied(parent));
            }
        }

        Ok(())
    }
}
