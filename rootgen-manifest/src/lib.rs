// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Inputs for a rootgen run.
//!
//! Raw values arrive from the command line and an optional `rootgen.toml`
//! as a [`ProjectConfig`]. [`ProjectConfig::resolve`] validates them into a
//! [`Project`], the only type the code generators accept.

mod config;
mod error;
mod project;
mod validate;

pub use config::{DirsSection, ProjectConfig, ProjectSection, ProjectToml};
pub use error::{Error, Result};
pub use project::{ClassSpec, DirectoryPaths, FunctionSpec, LibraryName, Project, TEST_HARNESS};
