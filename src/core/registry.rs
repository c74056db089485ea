//! Per-walk module registry
//!
//! Maps each symlink-resolved package directory to its single `Module`
//! record. The key set doubles as the walk history used to stop at packages
//! that were already expanded, which is also what terminates symlink cycles.

use crate::models::dep_type::DepType;
use crate::models::module::Module;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What happened to the registry when a module or classification was offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// Path was not known before and has been recorded
    Inserted,
    /// Path is not in the registry, nothing to upgrade
    Unknown,
    /// Recorded classification was at least as strong; nothing changed
    Kept(DepType),
    /// Recorded classification was replaced
    Upgraded { from: DepType, to: DepType },
}

/// Discovery-ordered modules keyed by real path
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    index: HashMap<PathBuf, usize>,
    modules: Vec<Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` has already been walked
    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    pub fn get(&self, path: &Path) -> Option<&Module> {
        self.index.get(path).map(|&i| &self.modules[i])
    }

    /// Record a newly discovered module
    ///
    /// A module whose path is already present is merged instead of appended,
    /// so there is never more than one entry per path.
    pub fn record(&mut self, module: Module) -> Merge {
        if self.contains(&module.path) {
            return self.upgrade_if_greater(&module.path, module.dep_type);
        }

        self.index.insert(module.path.clone(), self.modules.len());
        self.modules.push(module);
        Merge::Inserted
    }

    /// Raise the recorded classification of `path` to `dep_type` when
    /// `dep_type` is strictly greater. Classifications never go down.
    pub fn upgrade_if_greater(&mut self, path: &Path, dep_type: DepType) -> Merge {
        let Some(&i) = self.index.get(path) else {
            return Merge::Unknown;
        };

        let existing = &mut self.modules[i];
        if dep_type.is_greater_than(existing.dep_type) {
            let from = existing.dep_type;
            existing.dep_type = dep_type;
            Merge::Upgraded { from, to: dep_type }
        } else {
            Merge::Kept(existing.dep_type)
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Consume the registry, yielding modules in discovery order
    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }
}
