//! # impldoc-ooxml
//!
//! OOXML (Office Open XML) generation for impldoc.
//!
//! This crate provides:
//! - A small WordprocessingML document model (paragraphs, runs, direct
//!   formatting) whose setters reject values Word would refuse
//! - DOCX packaging with reproducible ZIP output
//! - A reader that recovers paragraph text from a written package
//!
//! ## Example: Writing a Document
//!
//! ```no_run
//! use impldoc_ooxml::{Alignment, Document, DocxWriter, FontSize, Paragraph};
//!
//! let mut doc = Document::new();
//! let mut title = Paragraph::new();
//! title.set_alignment(Alignment::Center);
//! title.add_run("Report").set_size(FontSize(26))?;
//! doc.push(title);
//!
//! DocxWriter::save(&doc, "report.docx")?;
//! # Ok::<(), impldoc_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod package;
pub mod reader;
pub mod units;
pub mod writer;

pub use archive::OoxmlArchive;
pub use document::{
    CoreProperties, Document, NumberingRef, Paragraph, ParagraphProps, Run, RunProps,
    StyleDefinition,
};
pub use error::{OoxmlError, Result};
pub use package::BULLET_NUM_ID;
pub use reader::{read_docx_paragraphs, read_paragraphs, ParagraphText};
pub use units::{Alignment, FontSize, Rgb, Twips};
pub use writer::DocxWriter;
