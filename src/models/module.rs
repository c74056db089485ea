//! Discovered package records

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

use super::dep_type::DepType;

/// Build system a native module declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NativeModuleType {
    /// Plain JavaScript package
    #[default]
    None,
    /// Fetches prebuilt binaries at install time
    Prebuild,
    /// Compiled locally through node-gyp
    NodeGyp,
}

impl NativeModuleType {
    pub fn is_native(self) -> bool {
        self != NativeModuleType::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NativeModuleType::None => "NONE",
            NativeModuleType::Prebuild => "PREBUILD",
            NativeModuleType::NodeGyp => "NODE_GYP",
        }
    }
}

impl fmt::Display for NativeModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paths are written lossily so that a non UTF-8 directory name cannot fail
/// a whole report
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// One physical installed package found by the walker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Symlink-resolved absolute directory of the package
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Name declared in the package's manifest
    pub name: String,
    pub dep_type: DepType,
    pub native_module_type: NativeModuleType,
}

/// Per-classification counts over a walk result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkSummary {
    pub total: usize,
    pub prod: usize,
    pub dev: usize,
    pub optional: usize,
    pub dev_optional: usize,
    pub native: usize,
}

impl WalkSummary {
    /// Count the modules of a walk result
    pub fn from_modules(modules: &[Module]) -> Self {
        let mut summary = WalkSummary {
            total: modules.len(),
            ..Default::default()
        };

        for module in modules {
            match module.dep_type {
                DepType::Prod => summary.prod += 1,
                DepType::Dev => summary.dev += 1,
                DepType::Optional => summary.optional += 1,
                DepType::DevOptional => summary.dev_optional += 1,
                DepType::Root => {}
            }
            if module.native_module_type.is_native() {
                summary.native += 1;
            }
        }

        summary
    }
}

/// Which modules of a walk result get reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleFilter {
    /// Keep DEV and DEV_OPTIONAL modules
    pub include_dev: bool,
    /// Keep OPTIONAL and DEV_OPTIONAL modules
    pub include_optional: bool,
    /// Keep only modules with a native build system
    pub native_only: bool,
}

impl Default for ModuleFilter {
    fn default() -> Self {
        Self {
            include_dev: true,
            include_optional: true,
            native_only: false,
        }
    }
}

impl ModuleFilter {
    pub fn matches(&self, module: &Module) -> bool {
        if !self.include_dev && module.dep_type.is_dev() {
            return false;
        }
        if !self.include_optional && module.dep_type.is_optional() {
            return false;
        }
        if self.native_only && !module.native_module_type.is_native() {
            return false;
        }
        true
    }

    pub fn apply(&self, modules: &[Module]) -> Vec<Module> {
        modules.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}

/// What the binary prints: the reported modules and their counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkReport {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub root: PathBuf,
    pub summary: WalkSummary,
    pub modules: Vec<Module>,
}

impl WalkReport {
    pub fn new(root: impl Into<PathBuf>, modules: Vec<Module>) -> Self {
        Self {
            root: root.into(),
            summary: WalkSummary::from_modules(&modules),
            modules,
        }
    }
}
