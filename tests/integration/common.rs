use depwalker::{DepType, Module, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A throwaway installed package tree
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create a project whose root package.json is `manifest`
    pub fn new(manifest: Value) -> Result<Self> {
        let dir = tempdir()?;
        write_manifest(dir.path(), &manifest)?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Install a package at `relative` (for example `node_modules/a`)
    pub fn install(&self, relative: &str, manifest: Value) -> Result<PathBuf> {
        let package_dir = self.root().join(relative);
        fs::create_dir_all(&package_dir)?;
        write_manifest(&package_dir, &manifest)?;
        Ok(package_dir)
    }

    /// Write a raw file relative to the project root
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Canonical form of a path relative to the project root
    pub fn real(&self, relative: &str) -> PathBuf {
        fs::canonicalize(self.root().join(relative)).unwrap()
    }
}

fn write_manifest(dir: &Path, manifest: &Value) -> Result<()> {
    fs::write(dir.join("package.json"), manifest.to_string())?;
    Ok(())
}

/// `(name, dep_type)` pairs in discovery order
pub fn classified(modules: &[Module]) -> Vec<(String, DepType)> {
    modules
        .iter()
        .map(|module| (module.name.clone(), module.dep_type))
        .collect()
}

/// The single module recorded at `path`
pub fn module_at<'a>(modules: &'a [Module], path: &Path) -> &'a Module {
    let matches: Vec<&Module> = modules.iter().filter(|m| m.path == path).collect();
    assert_eq!(matches.len(), 1, "expected exactly one module at {}", path.display());
    matches[0]
}
