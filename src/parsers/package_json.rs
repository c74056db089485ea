//! Package.json loading
//!
//! Only the fields the dependency walk needs are extracted: the package name
//! and the three dependency maps. Missing or malformed maps are treated as
//! empty so that lookups never have to care about absence.

use crate::error::{Result, ResultExt, WalkerError};
use serde_json::{Map, Value};
use std::path::Path;

/// File name of a package manifest
pub const PACKAGE_JSON: &str = "package.json";

/// A single `name: range` entry of a dependency map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: String,
    /// Version range as written; never interpreted
    pub version_spec: String,
}

/// The subset of package.json consulted by the walker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageJson {
    pub name: String,
    pub dependencies: Vec<DependencyEntry>,
    pub dev_dependencies: Vec<DependencyEntry>,
    pub optional_dependencies: Vec<DependencyEntry>,
}

impl PackageJson {
    /// Whether `name` is declared in `dependencies`
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep.name == name)
    }

    /// Whether `name` is declared in `optionalDependencies`
    pub fn has_optional_dependency(&self, name: &str) -> bool {
        self.optional_dependencies.iter().any(|dep| dep.name == name)
    }

    /// Names from `dependencies` that are not also listed as optional
    ///
    /// Some installers copy optional dependencies into `dependencies`; the
    /// optional declaration wins.
    pub fn required_dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .map(|dep| dep.name.as_str())
            .filter(move |name| !self.has_optional_dependency(name))
    }

    pub fn optional_dependency_names(&self) -> impl Iterator<Item = &str> {
        self.optional_dependencies.iter().map(|dep| dep.name.as_str())
    }

    pub fn dev_dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dev_dependencies.iter().map(|dep| dep.name.as_str())
    }
}

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content; `path` is only used for error context
    pub fn parse(content: &str, path: &Path) -> Result<PackageJson> {
        let json_value: Value =
            serde_json::from_str(content).map_err(|e| WalkerError::json_parse_error(path, e))?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(WalkerError::invalid_package_json(
                    path,
                    "Root value is not an object",
                ));
            }
        };

        Ok(PackageJson {
            name: Self::extract_optional_string(&obj, "name").unwrap_or_default(),
            dependencies: Self::extract_dependencies(&obj, "dependencies"),
            dev_dependencies: Self::extract_dependencies(&obj, "devDependencies"),
            optional_dependencies: Self::extract_dependencies(&obj, "optionalDependencies"),
        })
    }

    /// Load the manifest of the package in `module_dir`
    ///
    /// Returns `Ok(None)` when the directory has no package.json, which is
    /// what an incomplete install looks like. Read and parse failures are
    /// errors.
    pub async fn load(module_dir: &Path) -> Result<Option<PackageJson>> {
        let path = module_dir.join(PACKAGE_JSON);

        let content = match tokio::fs::read_to_string(&path).await {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            other => other.with_file_context(&path)?,
        };

        Self::parse(&content, &path).map(Some)
    }

    /// Extract a dependency map, keeping declaration order
    fn extract_dependencies(obj: &Map<String, Value>, field: &str) -> Vec<DependencyEntry> {
        match obj.get(field) {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(name, version)| DependencyEntry {
                    name: name.clone(),
                    version_spec: match version {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Extract an optional string field from a JSON object
    fn extract_optional_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
        match obj.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}
