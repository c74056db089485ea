//! Parsing functionality for installed packages
//!
//! This module loads package.json manifests and detects native module build
//! systems.

pub mod native_module;
pub mod package_json;

pub use native_module::NativeModuleDetector;
pub use package_json::{DependencyEntry, PackageJson, PackageJsonParser};
