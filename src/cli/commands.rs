//! Command implementations

use std::path::PathBuf;

use tracing::debug;

use super::Args;
use crate::config::{self, file::DEFAULT_CONFIG_FILE, CliArgs};
use crate::core::Walker;
use crate::error::{ErrorSeverity, Result};
use crate::models::config::Settings;
use crate::models::module::{ModuleFilter, WalkReport};
use crate::output::{create_formatter, create_writer};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Walk the dependency tree of a package
    Walk(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Walk(args)
    }

    /// Execute the command
    pub async fn execute(&self) -> Result<()> {
        match self {
            Command::Walk(args) => {
                let logging = super::logging::init();
                let settings = config::load_config(CliArgs::from(args))?;
                logging.apply(&settings);
                debug!(?settings, "resolved settings");

                let report = walk(&settings).await?;
                let formatter = create_formatter(
                    settings.output_format,
                    settings.use_colors,
                    settings.verbose,
                    settings.quiet,
                );
                let output = formatter.format(&report)?;

                create_writer(settings.output_file.clone()).write(&output)
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                config::create_default_config(&config_path)?;

                println!("Created default configuration file at: {}", config_path.display());
                println!("Every option is commented out; uncomment the ones you want to change.");
                Ok(())
            }
        }
    }

    /// Run the command and map the outcome to a process exit code
    pub async fn run(&self) -> i32 {
        match self.execute().await {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(err.severity())
            }
        }
    }
}

/// Walk the configured root and keep the modules the settings ask for
pub async fn walk(settings: &Settings) -> Result<WalkReport> {
    let walker = Walker::new(settings.root_path.clone())?;
    let modules = walker.walk_tree().await?;

    let filter = ModuleFilter {
        include_dev: settings.include_dev,
        include_optional: settings.include_optional,
        native_only: settings.native_only,
    };

    Ok(WalkReport::new(walker.root_module(), filter.apply(&modules)))
}

/// Exit code for a failure of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}
