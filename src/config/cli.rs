//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Command-line arguments that feed into settings
///
/// Switches are only forwarded when they were given, so an absent flag never
/// overrides a value coming from a file or the environment.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_dev: bool,
    pub no_optional: bool,
    pub native_only: bool,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            no_dev: args.no_dev,
            no_optional: args.no_optional,
            native_only: args.native_only,
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
            log_level: args.log_level.clone(),
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    /// Create a CLI configuration source from parsed Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            root_path: self.args.path.clone(),
            output_format: self.args.output_format,
            output_file: self.args.output_file.clone(),
            log_level: self.args.log_level.clone(),
            ..Default::default()
        };

        if self.args.no_dev {
            settings.include_dev = Some(false);
        }

        if self.args.no_optional {
            settings.include_optional = Some(false);
        }

        if self.args.native_only {
            settings.native_only = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        super::parser::validate_partial_settings(&settings, "<command line>")?;

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
