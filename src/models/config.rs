//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for the depwalker binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory of the root package to walk
    pub root_path: PathBuf,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to report DEV and DEV_OPTIONAL modules
    pub include_dev: bool,

    /// Whether to report OPTIONAL and DEV_OPTIONAL modules
    pub include_optional: bool,

    /// Only report modules that declare a native build system
    pub native_only: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show per-module details
    pub verbose: bool,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            output_format: OutputFormat::Text,
            output_file: None,
            include_dev: true,
            include_optional: true,
            native_only: false,
            use_colors: true,
            quiet: false,
            verbose: false,
            log_level: "warn".to_string(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub root_path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub include_dev: Option<bool>,
    pub include_optional: Option<bool>,
    pub native_only: Option<bool>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub log_level: Option<String>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root_path.is_some() {
            self.root_path = other.root_path;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.include_dev.is_some() {
            self.include_dev = other.include_dev;
        }
        if other.include_optional.is_some() {
            self.include_optional = other.include_optional;
        }
        if other.native_only.is_some() {
            self.native_only = other.native_only;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root_path) = &self.root_path {
            settings.root_path = root_path.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(include_dev) = self.include_dev {
            settings.include_dev = include_dev;
        }
        if let Some(include_optional) = self.include_optional {
            settings.include_optional = include_optional;
        }
        if let Some(native_only) = self.native_only {
            settings.native_only = native_only;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(log_level) = &self.log_level {
            settings.log_level = log_level.clone();
        }

        settings
    }
}
