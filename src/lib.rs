//! depwalker - installed dependency tree walker for Node.js packages
//!
//! Starting from a package directory, [`Walker`] follows the dependencies
//! declared in each `package.json`, resolves them against the `node_modules`
//! layout on disk and reports every installed package once, classified by how
//! it is needed ([`DepType`]) and whether it builds native code
//! ([`NativeModuleType`]).
//!
//! ```no_run
//! # async fn run() -> depwalker::Result<()> {
//! let walker = depwalker::Walker::new("./my-app")?;
//! for module in walker.walk_tree().await?.iter() {
//!     println!("{} {} {}", module.dep_type, module.name, module.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::Walker;
pub use error::{ErrorSeverity, OptionExt, Result, ResultExt, WalkerError};
pub use models::{
    child_dep_type, config::Settings, DepType, Module, NativeModuleType, WalkReport, WalkSummary,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
