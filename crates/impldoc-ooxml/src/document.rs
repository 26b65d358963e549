//! In-memory WordprocessingML document model
//!
//! This module defines the primitive styled elements that the writer
//! serializes to `word/document.xml`: paragraphs made of text runs, each
//! carrying its own direct formatting. Setters that accept values Word would
//! refuse return [`OoxmlError::InvalidStyle`] instead of producing a broken
//! package.

use crate::error::{OoxmlError, Result};
use crate::units::{Alignment, FontSize, Rgb, Twips};

/// Longest font family name Word stores
pub const MAX_FONT_NAME_LEN: usize = 31;

/// A document under construction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Package metadata written to `docProps/core.xml`
    pub properties: CoreProperties,
    /// Paragraph styles written to `word/styles.xml`
    styles: Vec<StyleDefinition>,
    /// Body paragraphs in document order
    paragraphs: Vec<Paragraph>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoreProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Author / creating application
    pub creator: Option<String>,
}

/// A paragraph style declared in `word/styles.xml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    /// Style ID referenced by `w:pStyle`
    pub id: String,
    /// Display name
    pub name: String,
    /// Outline level (0 = top level heading)
    pub outline_level: Option<u8>,
}

/// A paragraph with its properties and runs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    style_id: Option<String>,
    props: ParagraphProps,
    numbering: Option<NumberingRef>,
    runs: Vec<Run>,
}

/// Direct paragraph formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParagraphProps {
    /// Left indentation
    pub indent_left: Option<Twips>,
    /// Space above the paragraph
    pub spacing_before: Option<Twips>,
    /// Space below the paragraph
    pub spacing_after: Option<Twips>,
    /// Justification
    pub alignment: Option<Alignment>,
}

/// Reference to a list definition in `word/numbering.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    /// `w:numId`
    pub num_id: u32,
    /// `w:ilvl` (0-based nesting level)
    pub level: u8,
}

/// A run of text sharing one set of character properties
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    text: String,
    props: RunProps,
}

/// Direct character formatting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunProps {
    /// Font family for all scripts
    pub font: Option<String>,
    /// Font size
    pub size: Option<FontSize>,
    /// Text color
    pub color: Option<Rgb>,
    /// Bold weight
    pub bold: bool,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a paragraph style; a later declaration with the same ID wins
    pub fn add_style(&mut self, style: StyleDefinition) {
        match self.styles.iter_mut().find(|s| s.id == style.id) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    /// Declared paragraph styles, in declaration order
    pub fn styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    /// Append a paragraph to the body
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Body paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Check if the body is empty
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Number of body paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }
}

impl StyleDefinition {
    /// Create a body-level paragraph style
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            outline_level: None,
        }
    }

    /// Mark the style as a heading at the given outline level
    pub fn with_outline_level(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return it for styling
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Runs in order
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Mutable access to the runs, for restyling
    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Paragraph style ID
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }

    /// Set the paragraph style ID
    pub fn set_style_id(&mut self, style_id: &str) -> Result<()> {
        if style_id.is_empty() || style_id.chars().any(char::is_whitespace) {
            return Err(OoxmlError::invalid_style("style id", style_id));
        }
        self.style_id = Some(style_id.to_string());
        Ok(())
    }

    /// Direct paragraph formatting
    pub fn props(&self) -> &ParagraphProps {
        &self.props
    }

    /// Set the left indentation
    pub fn set_indent_left(&mut self, indent: Twips) -> Result<()> {
        self.props.indent_left = Some(check_length("left indent", indent)?);
        Ok(())
    }

    /// Set the space above and below the paragraph
    pub fn set_spacing(&mut self, before: Twips, after: Twips) -> Result<()> {
        self.props.spacing_before = Some(check_length("spacing before", before)?);
        self.props.spacing_after = Some(check_length("spacing after", after)?);
        Ok(())
    }

    /// Set the justification
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.props.alignment = Some(alignment);
    }

    /// List numbering, if the paragraph is a list item
    pub fn numbering(&self) -> Option<NumberingRef> {
        self.numbering
    }

    /// Make the paragraph an item of the given list
    pub fn set_numbering(&mut self, num_id: u32, level: u8) -> Result<()> {
        if level > 8 {
            return Err(OoxmlError::invalid_style("list level", level));
        }
        self.numbering = Some(NumberingRef { num_id, level });
        Ok(())
    }
}

impl Run {
    /// Create an unformatted run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            props: RunProps::default(),
        }
    }

    /// Run text, line breaks included
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Direct character formatting
    pub fn props(&self) -> &RunProps {
        &self.props
    }

    /// Set the font family
    pub fn set_font(&mut self, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed.len() > MAX_FONT_NAME_LEN
            || trimmed.chars().any(char::is_control)
        {
            return Err(OoxmlError::invalid_style("font", name));
        }
        self.props.font = Some(trimmed.to_string());
        Ok(())
    }

    /// Set the font size
    pub fn set_size(&mut self, size: FontSize) -> Result<()> {
        if size.0 == 0 || size.0 > FontSize::MAX_POINTS {
            return Err(OoxmlError::invalid_style("font size", size.0));
        }
        self.props.size = Some(size);
        Ok(())
    }

    /// Set the text color
    pub fn set_color(&mut self, color: Rgb) {
        self.props.color = Some(color);
    }

    /// Set bold weight
    pub fn set_bold(&mut self, bold: bool) {
        self.props.bold = bold;
    }
}

fn check_length(property: &'static str, length: Twips) -> Result<Twips> {
    if length > Twips::MAX {
        return Err(OoxmlError::invalid_style(property, length.get()));
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert!(doc.styles().is_empty());
    }

    #[test]
    fn test_add_style_replaces_same_id() {
        let mut doc = Document::new();
        doc.add_style(StyleDefinition::new("Heading1", "heading 1"));
        doc.add_style(StyleDefinition::new("Heading1", "heading 1").with_outline_level(0));

        assert_eq!(doc.styles().len(), 1);
        assert_eq!(doc.styles()[0].outline_level, Some(0));
    }

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let mut para = Paragraph::new();
        para.add_run("Note: ").set_bold(true);
        para.add_run("done");

        assert_eq!(para.text(), "Note: done");
        assert!(para.runs()[0].props().bold);
        assert!(!para.runs()[1].props().bold);
    }

    #[test]
    fn test_set_font_rejects_bad_names() {
        let mut run = Run::new("x");
        assert!(run.set_font("").is_err());
        assert!(run.set_font("   ").is_err());
        assert!(run.set_font("A Font Name That Is Far Too Long For Word").is_err());
        assert!(run.set_font("Bad\u{7}Font").is_err());
        assert!(run.props().font.is_none());

        run.set_font("Consolas").unwrap();
        assert_eq!(run.props().font.as_deref(), Some("Consolas"));
    }

    #[test]
    fn test_set_size_bounds() {
        let mut run = Run::new("x");
        assert!(run.set_size(FontSize(0)).is_err());
        assert!(run.set_size(FontSize(1639)).is_err());
        run.set_size(FontSize(1638)).unwrap();
        assert_eq!(run.props().size, Some(FontSize(1638)));
    }

    #[test]
    fn test_invalid_style_error_message() {
        let err = Run::new("x").set_font("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid font: ");
    }

    #[test]
    fn test_paragraph_lengths_bounded() {
        let mut para = Paragraph::new();
        assert!(para.set_indent_left(Twips(31_681)).is_err());
        assert!(para.set_spacing(Twips::ZERO, Twips(40_000)).is_err());

        para.set_indent_left(Twips::inch_tenths(3)).unwrap();
        para.set_spacing(Twips::pt(6), Twips::pt(6)).unwrap();
        assert_eq!(para.props().indent_left, Some(Twips(432)));
        assert_eq!(para.props().spacing_before, Some(Twips(120)));
    }

    #[test]
    fn test_style_id_validation() {
        let mut para = Paragraph::new();
        assert!(para.set_style_id("").is_err());
        assert!(para.set_style_id("Heading 1").is_err());
        para.set_style_id("Heading1").unwrap();
        assert_eq!(para.style_id(), Some("Heading1"));
    }

    #[test]
    fn test_numbering_level_bounded() {
        let mut para = Paragraph::new();
        assert!(para.set_numbering(1, 9).is_err());
        para.set_numbering(1, 0).unwrap();
        assert_eq!(para.numbering(), Some(NumberingRef { num_id: 1, level: 0 }));
    }
}
