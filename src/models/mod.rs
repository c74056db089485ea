//! Data models and structures for depwalker

pub mod config;
pub mod dep_type;
pub mod module;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use dep_type::{child_dep_type, DepType};
pub use module::{Module, ModuleFilter, NativeModuleType, WalkReport, WalkSummary};
