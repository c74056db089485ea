//! Error types and definitions for depwalker
//!
//! Every error is `Clone`: a failed walk is cached on its `Walker` and handed
//! to every caller that awaited it, so the underlying I/O and JSON sources are
//! kept behind an `Arc`.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::models::dep_type::DepType;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error level - the walk fails but the process may continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for depwalker operations
#[derive(Debug, Clone, Error)]
pub enum WalkerError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: Arc<std::io::Error>,
    },

    /// IO failure on a known file
    #[error("IO error on {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Invalid argument handed to a public constructor
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A required dependency could not be located on disk
    #[error(
        "Failed to locate module \"{name}\" from \"{from}\"\n\n\
         This normally means that either the package was already removed from \
         node_modules or the module installation failed."
    )]
    ModuleNotFound { name: String, from: PathBuf },

    /// A child dependency was classified as the root of the walk
    #[error("A child dependency can't be marked as {child} (parent is {parent})")]
    InvalidChildDepType { parent: DepType, child: DepType },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// Invalid package.json structure
    #[error("Invalid package.json structure in {path}: {message}")]
    InvalidPackageJson { path: PathBuf, message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Output serialization errors
    #[error("Serialization error: {message}")]
    Serialize { message: String },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

impl WalkerError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WalkerError::InvalidArgument { .. } => ErrorSeverity::Critical,
            WalkerError::InvalidPath { .. } => ErrorSeverity::Critical,
            WalkerError::Config { .. } => ErrorSeverity::Critical,
            WalkerError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            WalkerError::ConfigRead { .. } => ErrorSeverity::Critical,
            WalkerError::ConfigParse { .. } => ErrorSeverity::Critical,
            WalkerError::StdoutWrite { .. } => ErrorSeverity::Critical,
            WalkerError::OutputWrite { .. } => ErrorSeverity::Critical,
            WalkerError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,
            WalkerError::Serialize { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WalkerError::ModuleNotFound { name, from } => {
                format!(
                    "Dependency '{}' is declared by '{}' but is not installed anywhere up the node_modules tree. Re-run your package manager's install.",
                    name,
                    from.display()
                )
            }
            WalkerError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            WalkerError::JsonParse { file, source } => {
                format!("Invalid JSON in '{}': {}. Please check the file format.", file.display(), source)
            }
            WalkerError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            WalkerError::FileIo { path, source } => {
                format!("File system error on '{}': {}. Check disk space and permissions.", path.display(), source)
            }
            WalkerError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a directory containing a package.json.", path.display())
            }
            WalkerError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or use command line options.", path.display())
            }
            WalkerError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        WalkerError::Io {
            source: Arc::new(source),
        }
    }

    /// Create an IO error for a known file
    pub fn file_io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkerError::FileIo {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        WalkerError::JsonParse {
            file: file.into(),
            source: Arc::new(source),
        }
    }

    /// Create an invalid package.json error
    pub fn invalid_package_json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        WalkerError::InvalidPackageJson {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a module not found error
    pub fn module_not_found(name: impl Into<String>, from: impl Into<PathBuf>) -> Self {
        WalkerError::ModuleNotFound {
            name: name.into(),
            from: from.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        WalkerError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        WalkerError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        WalkerError::PermissionDenied { path: path.into() }
    }
}

impl From<std::io::Error> for WalkerError {
    fn from(err: std::io::Error) -> Self {
        WalkerError::io_error(err)
    }
}

/// Result type alias for depwalker operations
pub type Result<T> = std::result::Result<T, WalkerError>;
