//! Template rendering and artifact assembly for rootgen.
//!
//! [`files`] holds one renderer per artifact kind. [`Generator`] assembles
//! them for a [`Project`](rootgen_manifest::Project) into [`ArtifactGroup`]s
//! and hands each group to the materializer in `rootgen-core`.

mod artifact;
pub mod builder;
pub mod files;
mod generator;
mod naming;

pub use artifact::{ArtifactGroup, ArtifactKind, Destination};
pub use builder::{CodeBuilder, Indent};
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use naming::sort_case_insensitive;
