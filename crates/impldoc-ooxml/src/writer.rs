//! DOCX Writer
//!
//! This module serializes a [`Document`] to a complete DOCX package.
//!
//! # Example
//!
//! ```no_run
//! use impldoc_ooxml::{Document, DocxWriter, Paragraph};
//!
//! let mut doc = Document::new();
//! let mut para = Paragraph::new();
//! para.add_run("Hello");
//! doc.push(para);
//!
//! DocxWriter::save(&doc, "hello.docx")?;
//! # Ok::<(), impldoc_ooxml::OoxmlError>(())
//! ```

use std::fs;
use std::io::Cursor;
use std::path::Path;

use quick_xml::escape::escape;

use crate::archive::OoxmlArchive;
use crate::document::{Document, Paragraph, Run};
use crate::error::Result;
use crate::package;

/// DOCX Writer for generating DOCX files from a [`Document`]
#[derive(Debug, Default)]
pub struct DocxWriter {
    /// XML output buffer
    output: String,
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the in-memory package for a document
    pub fn package(doc: &Document) -> OoxmlArchive {
        let mut writer = DocxWriter::new();
        let document_xml = writer.generate_document_xml(doc);

        let mut archive = OoxmlArchive::new();
        archive.set_string(package::CONTENT_TYPES_PATH, package::content_types_xml());
        archive.set_string(package::ROOT_RELS_PATH, package::root_rels_xml());
        archive.set_string(package::DOCUMENT_RELS_PATH, package::document_rels_xml());
        archive.set_string(package::DOCUMENT_PATH, document_xml);
        archive.set_string(package::STYLES_PATH, package::styles_xml(doc.styles()));
        archive.set_string(package::NUMBERING_PATH, package::numbering_xml());
        archive.set_string(package::CORE_PATH, package::core_xml(&doc.properties));
        archive
    }

    /// Generate the DOCX file as bytes
    pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
        let archive = Self::package(doc);
        let mut output = Cursor::new(Vec::new());
        archive.write_to(&mut output)?;
        Ok(output.into_inner())
    }

    /// Generate the DOCX file and write it to `path`
    ///
    /// The package is built completely in memory first; the target file is
    /// only created (or truncated) once there is something to write.
    pub fn save(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        let bytes = Self::to_bytes(doc)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, doc: &Document) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(r#"<w:document "#);
        self.output
            .push_str(r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#);
        self.output.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for paragraph in doc.paragraphs() {
            self.generate_paragraph(paragraph);
        }

        // US Letter, one inch margins
        self.output.push_str("<w:sectPr>\n");
        self.output
            .push_str("<w:pgSz w:w=\"12240\" w:h=\"15840\"/>\n");
        self.output.push_str(
            "<w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\n",
        );
        self.output.push_str("</w:sectPr>\n");

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>\n");

        let props = para.props();
        let has_props = para.style_id().is_some()
            || para.numbering().is_some()
            || props.spacing_before.is_some()
            || props.spacing_after.is_some()
            || props.indent_left.is_some()
            || props.alignment.is_some();

        if has_props {
            self.output.push_str("<w:pPr>\n");
            if let Some(style) = para.style_id() {
                self.output
                    .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", escape(style)));
            }
            if let Some(numbering) = para.numbering() {
                self.output.push_str("<w:numPr>\n");
                self.output
                    .push_str(&format!("<w:ilvl w:val=\"{}\"/>\n", numbering.level));
                self.output
                    .push_str(&format!("<w:numId w:val=\"{}\"/>\n", numbering.num_id));
                self.output.push_str("</w:numPr>\n");
            }
            if props.spacing_before.is_some() || props.spacing_after.is_some() {
                self.output.push_str("<w:spacing");
                if let Some(before) = props.spacing_before {
                    self.output
                        .push_str(&format!(" w:before=\"{}\"", before.get()));
                }
                if let Some(after) = props.spacing_after {
                    self.output.push_str(&format!(" w:after=\"{}\"", after.get()));
                }
                self.output.push_str("/>\n");
            }
            if let Some(indent) = props.indent_left {
                self.output
                    .push_str(&format!("<w:ind w:left=\"{}\"/>\n", indent.get()));
            }
            if let Some(alignment) = props.alignment {
                self.output
                    .push_str(&format!("<w:jc w:val=\"{}\"/>\n", alignment.as_ooxml()));
            }
            self.output.push_str("</w:pPr>\n");
        }

        for run in para.runs() {
            self.generate_run(run);
        }

        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a run
    fn generate_run(&mut self, run: &Run) {
        self.output.push_str("<w:r>\n");

        let props = run.props();
        if props.font.is_some() || props.size.is_some() || props.color.is_some() || props.bold {
            self.output.push_str("<w:rPr>\n");
            if let Some(ref font) = props.font {
                let font = escape(font.as_str());
                self.output.push_str(&format!(
                    "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:eastAsia=\"{0}\" w:cs=\"{0}\"/>\n",
                    font
                ));
            }
            if props.bold {
                self.output.push_str("<w:b/>\n<w:bCs/>\n");
            }
            if let Some(color) = props.color {
                self.output
                    .push_str(&format!("<w:color w:val=\"{}\"/>\n", color.hex()));
            }
            if let Some(size) = props.size {
                self.output
                    .push_str(&format!("<w:sz w:val=\"{}\"/>\n", size.half_points()));
                self.output
                    .push_str(&format!("<w:szCs w:val=\"{}\"/>\n", size.half_points()));
            }
            self.output.push_str("</w:rPr>\n");
        }

        self.generate_text(run.text());
        self.output.push_str("</w:r>\n");
    }

    /// Generate run content, turning line breaks and tabs into their elements
    fn generate_text(&mut self, text: &str) {
        if text.is_empty() {
            self.output.push_str("<w:t xml:space=\"preserve\"></w:t>\n");
            return;
        }

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.output.push_str("<w:br/>\n");
            }
            for (j, piece) in line.split('\t').enumerate() {
                if j > 0 {
                    self.output.push_str("<w:tab/>\n");
                }
                if !piece.is_empty() {
                    self.output.push_str(&format!(
                        "<w:t xml:space=\"preserve\">{}</w:t>\n",
                        escape(piece)
                    ));
                }
            }
        }
    }
}
