//! impldoc CLI - Command-line interface library
//!
//! Writes the OOP implementation report, `Implementation_Explanation.docx`,
//! into the working directory. The binary takes no arguments.
//!
//! # Library Usage
//!
//! ```ignore
//! use impldoc_cli::{generate_command, run_cli};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or write the report somewhere else
//! generate_command(Path::new("out/report.docx"))?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! impldoc
//! # Document created successfully: Implementation_Explanation.docx
//! ```

pub mod app;

pub use app::{generate_command, run_cli};
