//! Report data structures.
//!
//! Operations build reports, then render them to an [`output::Output`] target.

mod generate;
mod output;

pub use generate::{FileLine, GenerateReport, GenerationResult, PreviewFile};
pub use output::{Report, TerminalOutput};
