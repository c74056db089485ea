//! Error context utilities
//!
//! Helpers for attaching path context to foreign errors so that call sites in
//! the walker can stay on `?`.

use crate::error::{Result, WalkerError};
use std::path::Path;

/// Extension trait for `std::io::Result` to add path context to errors
pub trait ResultExt<T> {
    /// Map an I/O failure on `path` into a `WalkerError`
    ///
    /// Permission failures become `PermissionDenied`, everything else becomes
    /// `FileIo` naming `path`.
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::io::Result<T> {
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            if err.kind() == std::io::ErrorKind::PermissionDenied {
                WalkerError::permission_denied(path.as_ref())
            } else {
                WalkerError::file_io_error(path.as_ref(), err)
            }
        })
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> WalkerError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> WalkerError,
    {
        self.ok_or_else(err_fn)
    }
}
