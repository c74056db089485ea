//! Filesystem helpers shared by the walker

pub mod path_resolver;

pub use path_resolver::{resolve_dependency, NODE_MODULES};
