//! Installed dependency resolution
//!
//! Finds the directory a dependency was installed into by searching
//! `node_modules` folders upward from the package that declares it, the same
//! way nested installs shadow hoisted ones. No package manager metadata is
//! consulted; the layout on disk is the only source of truth.

use std::path::{Path, PathBuf};
use tracing::trace;

/// Directory name package managers install dependencies into
pub const NODE_MODULES: &str = "node_modules";

/// Resolve the installed directory of dependency `name` declared by the
/// package in `from`.
///
/// `from` should already be a real path so that packages living in a
/// virtual store resolve their siblings. Returns `None` once the search has
/// reached the filesystem root without a match.
pub async fn resolve_dependency(name: &str, from: &Path) -> Option<PathBuf> {
    let mut search_dir = from.to_path_buf();
    let mut last_candidate: Option<PathBuf> = None;

    loop {
        let candidate = node_modules_candidate(&search_dir, name);
        if last_candidate.as_ref() == Some(&candidate) {
            return None;
        }

        trace!(dependency = name, candidate = %candidate.display(), "probing");
        // symlinks count as present even when dangling; the walker drops those
        // once it fails to canonicalize them
        if tokio::fs::symlink_metadata(&candidate).await.is_ok() {
            return Some(candidate);
        }

        search_dir = next_search_dir(&search_dir);
        last_candidate = Some(candidate);
    }
}

/// `dir/node_modules/<name>`, with scoped names split into their segments
pub fn node_modules_candidate(dir: &Path, name: &str) -> PathBuf {
    let mut candidate = dir.join(NODE_MODULES);
    for segment in name.split('/').filter(|segment| !segment.is_empty()) {
        candidate.push(segment);
    }
    candidate
}

/// The directory whose `node_modules` is searched after `dir`'s
///
/// For a package installed at `<base>/node_modules/<pkg>` this is `<base>`.
/// Scoped packages (`<base>/node_modules/@scope/<pkg>`) and directories that
/// are not inside a `node_modules` folder climb one extra level first.
pub fn next_search_dir(dir: &Path) -> PathBuf {
    let parent_is_node_modules = dir
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == NODE_MODULES);

    let mut next = dir;
    if !parent_is_node_modules {
        next = parent_or_self(next);
    }
    parent_or_self(parent_or_self(next)).to_path_buf()
}

fn parent_or_self(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
