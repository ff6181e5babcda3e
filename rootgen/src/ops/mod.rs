//! Core operations.
//!
//! Business logic for rootgen, separated from CLI argument parsing and
//! output rendering.

pub mod generate;

pub use generate::generate;
