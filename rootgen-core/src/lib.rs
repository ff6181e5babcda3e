//! Core utilities and types for the rootgen project scaffolder.
//!
//! This crate owns everything that touches the filesystem: the overwrite
//! policy, the write-if-absent materializer and the small path helpers the
//! other crates share.

mod file;
mod utils;

// File operations
pub use file::{
    File, GeneratedFile, Overwrite, WriteOutcome, WriteResult, make_executable, materialize,
    render_lines,
};
// Path and name utilities
pub use utils::{is_identifier, normalize_dir};
