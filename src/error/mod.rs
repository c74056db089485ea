//! Error handling for depwalker
//!
//! This module provides the crate-wide error type, the `Result` alias and
//! small context helpers used by the walker and the CLI.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, Result, WalkerError};
