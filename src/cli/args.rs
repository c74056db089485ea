//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// depwalker - installed dependency tree walker for Node.js packages
#[derive(Parser, Debug)]
#[command(name = "depwalker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List every installed package a Node.js project depends on")]
#[command(long_about = "depwalker walks the node_modules tree of a Node.js package, starting from its package.json. \
Every installed dependency is reported once, with its resolved path, how it is needed \
(PROD, DEV, OPTIONAL, DEV_OPTIONAL) and whether it builds native code (prebuild-install or node-gyp).")]
#[command(after_help = "EXAMPLES:

    # Walk the package in the current directory
    depwalker

    # Walk another package
    depwalker --path ./my-app

    # Only production dependencies, as JSON
    depwalker --path ./my-app --no-dev --no-optional --output json

    # Which native modules would need rebuilding
    depwalker --native-only

    # Save a CSV report
    depwalker --output csv --output-file modules.csv

    # Create a default configuration file
    depwalker --init
")]
pub struct Args {
    /// Directory of the root package
    #[arg(short, long, value_name = "PATH", help = "Directory of the package to walk (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' for people, 'json' for tools, 'csv' for spreadsheets (default: text)")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Leave DEV and DEV_OPTIONAL modules out of the report
    #[arg(long, help = "Leave development-only modules (DEV, DEV_OPTIONAL) out of the report")]
    pub no_dev: bool,

    /// Leave OPTIONAL and DEV_OPTIONAL modules out of the report
    #[arg(long, help = "Leave optional modules (OPTIONAL, DEV_OPTIONAL) out of the report")]
    pub no_optional: bool,

    /// Only report native modules
    #[arg(long, help = "Only report modules that build native code (prebuild-install or binding.gyp)")]
    pub native_only: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful when piping output)")]
    pub no_colors: bool,

    /// Print bare records without headers or summary
    #[arg(short, long, conflicts_with = "verbose", help = "Only print the module records, without headers or summary")]
    pub quiet: bool,

    /// Include module paths and debug logging
    #[arg(short, long, help = "Show module paths and enable debug logging")]
    pub verbose: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", help = "Log level used when RUST_LOG is not set: trace, debug, info, warn, error")]
    pub log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .depwalker.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.depwalker.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
