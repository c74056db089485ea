//! Core functionality for walking installed dependency trees

pub mod registry;
pub mod walker;

pub use registry::{Merge, ModuleRegistry};
pub use walker::Walker;
