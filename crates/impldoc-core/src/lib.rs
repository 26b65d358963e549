//! # impldoc-core
//!
//! Section rendering and document assembly for impldoc.
//!
//! The pipeline is strictly linear: [`assemble`] walks the catalogue and
//! calls [`render`] for each section; the renderer styles every element
//! through the [`style`] adapter; the finished [`DocumentModel`] is written
//! once by [`write`].
//!
//! ## Example
//!
//! ```no_run
//! use impldoc_core::{catalogue, generate, OUTPUT_FILE};
//!
//! generate(&catalogue::catalogue(), OUTPUT_FILE.as_ref())?;
//! # Ok::<(), impldoc_core::GenerateError>(())
//! ```

pub mod assemble;
pub mod catalogue;
pub mod error;
pub mod model;
pub mod render;
pub mod style;

pub use assemble::{assemble, document_properties, generate, write};
pub use error::{GenerateError, Result};
pub use model::{DocumentModel, Element, ElementKind};
pub use render::render;
pub use style::{Formatting, StyleSpec};

/// File written in the working directory
pub const OUTPUT_FILE: &str = "Implementation_Explanation.docx";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate the full report at `path`
pub fn generate_report(path: &std::path::Path) -> Result<()> {
    generate(&catalogue::catalogue(), path)
}
