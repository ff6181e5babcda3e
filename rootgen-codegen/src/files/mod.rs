//! One renderer per artifact kind.
//!
//! Every renderer is a plain struct implementing [`GeneratedFile`]: it owns
//! the data it needs, has a logical name (no suffix) and renders to lines.
//! None of them validate their inputs.
//!
//! [`GeneratedFile`]: rootgen_core::GeneratedFile

mod autogen_sh;
mod class_header;
mod class_source;
mod configure_ac;
mod full_clean;
mod function_header;
mod function_source;
mod link_def;
mod makefile_am;

pub use autogen_sh::AutogenSh;
pub use class_header::ClassHeader;
pub use class_source::ClassSource;
pub use configure_ac::ConfigureAc;
pub use full_clean::FullClean;
pub use function_header::FunctionHeader;
pub use function_source::FunctionSource;
pub use link_def::LinkDef;
pub use makefile_am::MakefileAm;
pub use run_tests::RunTests;
