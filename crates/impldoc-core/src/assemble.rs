//! Document assembler
//!
//! Builds the whole report: title block, every catalogue section in order,
//! a bulleted summary restating the section titles, and a closing note.

use std::path::Path;

use impldoc_ast::SectionSpec;
use impldoc_ooxml::{CoreProperties, DocxWriter};
use tracing::{debug, info};

use crate::error::{GenerateError, Result};
use crate::model::DocumentModel;
use crate::render::{self, render};

/// Report title
pub const DOCUMENT_TITLE: &str = "LMS Mini Project";
/// Line under the title
pub const DOCUMENT_SUBTITLE: &str = "OOP Concepts Implementation Explanation";
/// Heading of the closing summary
pub const SUMMARY_HEADING: &str = "Summary";
/// Label of the closing note
pub const NOTE_LABEL: &str = "Note";
/// Text of the closing note
pub const NOTE_TEXT: &str = "All these concepts are actively used in the working application \
with proper integration between different components, making this a complete and functional \
Learning Management System.";
/// Value written to the document's creator property
pub const CREATOR: &str = "impldoc";

/// Build the report for `catalogue`, keeping its order
///
/// The first styling failure aborts assembly and the partial model is
/// dropped.
pub fn assemble(catalogue: &[SectionSpec]) -> Result<DocumentModel> {
    let mut model = DocumentModel::new();

    model.append(render::title(DOCUMENT_TITLE)?);
    model.append(render::subtitle(DOCUMENT_SUBTITLE)?);

    for section in catalogue {
        render(section, &mut model)?;
    }

    model.append(render::heading(SUMMARY_HEADING)?);
    for section in catalogue {
        model.append(render::bullet(&section.title)?);
    }

    model.append(render::labeled_body(NOTE_LABEL, NOTE_TEXT)?);

    debug!(
        sections = catalogue.len(),
        elements = model.len(),
        "assembled document model"
    );
    Ok(model)
}

/// Core properties of every generated report
pub fn document_properties() -> CoreProperties {
    CoreProperties {
        title: Some(DOCUMENT_TITLE.to_string()),
        subject: Some(DOCUMENT_SUBTITLE.to_string()),
        creator: Some(CREATOR.to_string()),
    }
}

/// Serialize a finished model to `path`, replacing any existing file
pub fn write(model: DocumentModel, path: &Path) -> Result<()> {
    let document = model.into_document(document_properties());
    DocxWriter::save(&document, path).map_err(|source| GenerateError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), paragraphs = document.len(), "document written");
    Ok(())
}

/// Assemble `catalogue` and write it to `path`
pub fn generate(catalogue: &[SectionSpec], path: &Path) -> Result<()> {
    let model = assemble(catalogue)?;
    write(model, path)
}
