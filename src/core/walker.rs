//! Dependency tree walking
//!
//! Starting from a root package, the walker follows the dependencies each
//! manifest declares, resolves them to installed directories and classifies
//! every package it reaches. Each physical package (keyed by real path) is
//! expanded once; later routes to it can only strengthen its classification.

use crate::core::registry::{Merge, ModuleRegistry};
use crate::error::{Result, WalkerError};
use crate::models::dep_type::{child_dep_type, DepType};
use crate::models::module::Module;
use crate::parsers::{NativeModuleDetector, PackageJsonParser};
use crate::utils::path_resolver::resolve_dependency;
use futures::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Walks the installed dependency tree of a single root package
///
/// The walk runs at most once per instance. Concurrent and later calls to
/// [`Walker::walk_tree`] all observe the same result, including a failure.
#[derive(Debug)]
pub struct Walker {
    root_module: PathBuf,
    cache: OnceCell<Result<Arc<Vec<Module>>>>,
}

impl Walker {
    /// Create a walker for the package in `root_module`
    ///
    /// No filesystem access happens until the first [`Walker::walk_tree`].
    pub fn new(root_module: impl Into<PathBuf>) -> Result<Self> {
        let root_module = root_module.into();
        if root_module.as_os_str().is_empty() {
            return Err(WalkerError::invalid_argument(
                "root module path must be a non-empty path",
            ));
        }

        debug!(root = %root_module.display(), "creating walker");
        Ok(Self {
            root_module,
            cache: OnceCell::new(),
        })
    }

    /// The root path exactly as it was supplied
    pub fn root_module(&self) -> &Path {
        &self.root_module
    }

    /// Walk the tree and return every discovered module
    ///
    /// Modules are in discovery order: the root first, then depth first.
    pub async fn walk_tree(&self) -> Result<Arc<Vec<Module>>> {
        if self.cache.initialized() {
            debug!("tree walk completed already, reusing result");
        }

        self.cache.get_or_init(|| self.run()).await.clone()
    }

    async fn run(&self) -> Result<Arc<Vec<Module>>> {
        debug!(root = %self.root_module.display(), "starting tree walk");

        let mut registry = ModuleRegistry::new();
        walk_module(&mut registry, self.root_module.clone(), DepType::Root).await?;

        info!(modules = registry.len(), "tree walk finished");
        Ok(Arc::new(registry.into_modules()))
    }
}

/// Visit the package at `module_path` reached with classification `dep_type`
fn walk_module(
    registry: &mut ModuleRegistry,
    module_path: PathBuf,
    dep_type: DepType,
) -> BoxFuture<'_, Result<()>> {
    async move {
        let real_path = match tokio::fs::canonicalize(&module_path).await {
            Ok(path) => path,
            Err(err) => {
                debug!(path = %module_path.display(), error = %err, "unresolvable path, skipping");
                return Ok(());
            }
        };

        debug!(path = %real_path.display(), %dep_type, "walk reached");

        if registry.contains(&real_path) {
            match registry.upgrade_if_greater(&real_path, dep_type) {
                Merge::Upgraded { from, to } => {
                    debug!(path = %real_path.display(), %from, %to, "already walked, upgrading");
                }
                _ => debug!(path = %real_path.display(), "already walked this route"),
            }
            return Ok(());
        }

        // packages without a manifest are left behind by interrupted installs
        let Some(package_json) = PackageJsonParser::load(&real_path).await? else {
            debug!(path = %real_path.display(), "walk hit a dead end, module is incomplete");
            return Ok(());
        };

        let native_module_type = NativeModuleDetector::detect(&real_path, &package_json).await?;
        registry.record(Module {
            path: real_path.clone(),
            name: package_json.name.clone(),
            dep_type,
            native_module_type,
        });

        let prod_child = child_dep_type(dep_type, DepType::Prod)?;
        for name in package_json.required_dependency_names() {
            walk_dependency(registry, name, &real_path, prod_child).await?;
        }

        let optional_child = child_dep_type(dep_type, DepType::Optional)?;
        for name in package_json.optional_dependency_names() {
            walk_dependency(registry, name, &real_path, optional_child).await?;
        }

        // dev dependencies of installed packages are never installed
        if dep_type == DepType::Root {
            let dev_child = child_dep_type(dep_type, DepType::Dev)?;
            for name in package_json.dev_dependency_names() {
                walk_dependency(registry, name, &real_path, dev_child).await?;
            }
        }

        Ok(())
    }
    .boxed()
}

/// Locate dependency `name` of the package at `from` and walk it
async fn walk_dependency(
    registry: &mut ModuleRegistry,
    name: &str,
    from: &Path,
    dep_type: DepType,
) -> Result<()> {
    match resolve_dependency(name, from).await {
        Some(path) => walk_module(registry, path, dep_type).await,
        None if dep_type.is_optional() => {
            debug!(dependency = name, from = %from.display(), "optional dependency not installed");
            Ok(())
        }
        None => Err(WalkerError::module_not_found(name, from)),
    }
}
