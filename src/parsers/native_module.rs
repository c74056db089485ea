//! Native module build system detection
//!
//! A static check over the manifest and the package root. Nothing is executed
//! and the helper packages themselves are not inspected.

use crate::error::{Result, ResultExt};
use crate::models::module::NativeModuleType;
use crate::parsers::package_json::PackageJson;
use std::path::Path;

/// Helper package that downloads prebuilt binaries at install time
pub const PREBUILD_HELPER: &str = "prebuild-install";

/// node-gyp build descriptor expected at the package root
pub const NODE_GYP_DESCRIPTOR: &str = "binding.gyp";

/// Detect which native build system, if any, a package declares
pub struct NativeModuleDetector;

impl NativeModuleDetector {
    pub async fn detect(module_dir: &Path, package_json: &PackageJson) -> Result<NativeModuleType> {
        if package_json.has_dependency(PREBUILD_HELPER) {
            return Ok(NativeModuleType::Prebuild);
        }

        let descriptor = module_dir.join(NODE_GYP_DESCRIPTOR);
        if tokio::fs::try_exists(&descriptor)
            .await
            .with_file_context(&descriptor)?
        {
            return Ok(NativeModuleType::NodeGyp);
        }

        Ok(NativeModuleType::None)
    }
}
