//! impldoc-ast - Content model definitions
//!
//! This crate provides the types that describe the authored content of an
//! implementation report: topical sections and the code excerpts they carry.

pub mod section;

pub use section::{CodeBlock, SectionSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
