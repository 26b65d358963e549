//! Style primitives adapter
//!
//! Every formatting decision in a generated report lives in the table behind
//! [`StyleSpec::formatting`]. The named operations below apply one row of that
//! table to an OOXML paragraph; nothing else in the crate sets fonts, colors,
//! indentation or spacing directly.
//!
//! Styling calls go through the validating setters of `impldoc-ooxml`. A
//! rejected value is returned unchanged as an [`OoxmlError`].

use impldoc_ooxml::{
    Alignment, FontSize, OoxmlError, Paragraph, Rgb, Run, StyleDefinition, Twips, BULLET_NUM_ID,
};

type Result<T> = std::result::Result<T, OoxmlError>;

/// Navy used for the title and section headings
pub const HEADING_COLOR: Rgb = Rgb(0, 51, 102);
/// Proportional font for prose
pub const BODY_FONT: &str = "Calibri";
/// Proportional font for the title and headings
pub const HEADING_FONT: &str = "Calibri Light";
/// Fixed-width font for code listings
pub const CODE_FONT: &str = "Consolas";

/// A named formatting intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSpec {
    /// Document title and subtitle
    Title,
    /// Heading opening each section and the summary
    SectionHeading,
    /// Prose paragraphs
    BodyText,
    /// Bold caption, standalone or as a leading run
    BoldLabel,
    /// Preformatted code listing
    CodeBlock,
    /// Item of the summary list
    BulletItem,
}

/// The formatting tuple a [`StyleSpec`] stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatting {
    /// Font family
    pub font: &'static str,
    /// Font size
    pub size: FontSize,
    /// Text color
    pub color: Rgb,
    /// Bold weight
    pub bold: bool,
    /// Left indentation
    pub indent_left: Twips,
    /// Space above the paragraph
    pub space_before: Twips,
    /// Space below the paragraph
    pub space_after: Twips,
    /// Justification
    pub alignment: Alignment,
}

const TITLE: Formatting = Formatting {
    font: HEADING_FONT,
    size: FontSize(26),
    color: HEADING_COLOR,
    bold: false,
    indent_left: Twips::ZERO,
    space_before: Twips::ZERO,
    space_after: Twips::pt(12),
    alignment: Alignment::Center,
};

const SECTION_HEADING: Formatting = Formatting {
    font: HEADING_FONT,
    size: FontSize(14),
    color: HEADING_COLOR,
    bold: true,
    indent_left: Twips::ZERO,
    space_before: Twips::pt(18),
    space_after: Twips::pt(6),
    alignment: Alignment::Left,
};

const BODY_TEXT: Formatting = Formatting {
    font: BODY_FONT,
    size: FontSize(11),
    color: Rgb::BLACK,
    bold: false,
    indent_left: Twips::ZERO,
    space_before: Twips::ZERO,
    space_after: Twips::pt(6),
    alignment: Alignment::Left,
};

const BOLD_LABEL: Formatting = Formatting {
    font: BODY_FONT,
    size: FontSize(11),
    color: Rgb::BLACK,
    bold: true,
    indent_left: Twips::ZERO,
    space_before: Twips::pt(6),
    space_after: Twips::ZERO,
    alignment: Alignment::Left,
};

const CODE_BLOCK: Formatting = Formatting {
    font: CODE_FONT,
    size: FontSize(9),
    color: Rgb::BLACK,
    bold: false,
    indent_left: Twips::inch_tenths(3),
    space_before: Twips::pt(6),
    space_after: Twips::pt(6),
    alignment: Alignment::Left,
};

const BULLET_ITEM: Formatting = Formatting {
    font: BODY_FONT,
    size: FontSize(11),
    color: Rgb::BLACK,
    bold: false,
    indent_left: Twips::inch_tenths(5),
    space_before: Twips::ZERO,
    space_after: Twips::ZERO,
    alignment: Alignment::Left,
};

impl StyleSpec {
    /// Every variant, in declaration order
    pub const ALL: [StyleSpec; 6] = [
        StyleSpec::Title,
        StyleSpec::SectionHeading,
        StyleSpec::BodyText,
        StyleSpec::BoldLabel,
        StyleSpec::CodeBlock,
        StyleSpec::BulletItem,
    ];

    /// The fixed formatting tuple for this intent
    pub fn formatting(self) -> &'static Formatting {
        match self {
            StyleSpec::Title => &TITLE,
            StyleSpec::SectionHeading => &SECTION_HEADING,
            StyleSpec::BodyText => &BODY_TEXT,
            StyleSpec::BoldLabel => &BOLD_LABEL,
            StyleSpec::CodeBlock => &CODE_BLOCK,
            StyleSpec::BulletItem => &BULLET_ITEM,
        }
    }

    /// Word paragraph style the element is tagged with
    pub fn style_id(self) -> &'static str {
        match self {
            StyleSpec::Title => "Title",
            StyleSpec::SectionHeading => "Heading1",
            StyleSpec::BodyText => "BodyText",
            StyleSpec::BoldLabel => "CodeLabel",
            StyleSpec::CodeBlock => "SourceCode",
            StyleSpec::BulletItem => "ListBullet",
        }
    }

    /// Style declaration for `word/styles.xml`
    pub fn definition(self) -> StyleDefinition {
        match self {
            StyleSpec::Title => StyleDefinition::new(self.style_id(), "Title"),
            StyleSpec::SectionHeading => {
                StyleDefinition::new(self.style_id(), "heading 1").with_outline_level(0)
            }
            StyleSpec::BodyText => StyleDefinition::new(self.style_id(), "Body Text"),
            StyleSpec::BoldLabel => StyleDefinition::new(self.style_id(), "Code Label"),
            StyleSpec::CodeBlock => StyleDefinition::new(self.style_id(), "Source Code"),
            StyleSpec::BulletItem => StyleDefinition::new(self.style_id(), "List Bullet"),
        }
    }
}

/// Apply the character half of a tuple to one run
pub fn apply_run(spec: StyleSpec, run: &mut Run) -> Result<()> {
    let f = spec.formatting();
    run.set_font(f.font)?;
    run.set_size(f.size)?;
    run.set_color(f.color);
    run.set_bold(f.bold);
    Ok(())
}

/// Apply the paragraph half of a tuple, leaving runs untouched
pub fn apply_paragraph(spec: StyleSpec, paragraph: &mut Paragraph) -> Result<()> {
    let f = spec.formatting();
    paragraph.set_style_id(spec.style_id())?;
    paragraph.set_indent_left(f.indent_left)?;
    paragraph.set_spacing(f.space_before, f.space_after)?;
    paragraph.set_alignment(f.alignment);
    if spec == StyleSpec::BulletItem {
        paragraph.set_numbering(BULLET_NUM_ID, 0)?;
    }
    Ok(())
}

fn apply(spec: StyleSpec, paragraph: &mut Paragraph) -> Result<()> {
    apply_paragraph(spec, paragraph)?;
    for run in paragraph.runs_mut() {
        apply_run(spec, run)?;
    }
    Ok(())
}

/// Style a paragraph and all its runs as [`StyleSpec::Title`]
pub fn title(paragraph: &mut Paragraph) -> Result<()> {
    apply(StyleSpec::Title, paragraph)
}

/// Style a paragraph and all its runs as [`StyleSpec::SectionHeading`]
pub fn section_heading(paragraph: &mut Paragraph) -> Result<()> {
    apply(StyleSpec::SectionHeading, paragraph)
}

/// Style a paragraph and all its runs as [`StyleSpec::BodyText`]
pub fn body_text(paragraph: &mut Paragraph) -> Result<()> {
    apply(StyleSpec::BodyText, paragraph)
}

/// Style a paragraph and all its runs as [`StyleSpec::BoldLabel`]
pub fn bold_label(paragraph: &mut Paragraph) -> Result<()> {
    apply(StyleSpec::BoldLabel, paragraph)
}

/// Style a paragraph and all its runs as [`StyleSpec::CodeBlock`]
pub fn code_block(paragraph: &mut Paragraph) -> Result<()> {
    apply(StyleSpec::CodeBlock, paragraph)
}

/// Style a paragraph and all its runs as [`StyleSpec::BulletItem`]
pub fn bullet_item(paragraph: &mut Paragraph) -> Result<()> {
    apply(StyleSpec::BulletItem, paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_uses_fixed_width_font() {
        let f = StyleSpec::CodeBlock.formatting();
        assert_eq!(f.font, "Consolas");
        assert_eq!(f.size, FontSize(9));
        assert_eq!(f.indent_left, Twips(432));
        assert_eq!(f.space_before, Twips::pt(6));
        assert_eq!(f.space_after, Twips::pt(6));
    }

    #[test]
    fn test_title_centered_and_navy() {
        let f = StyleSpec::Title.formatting();
        assert_eq!(f.alignment, Alignment::Center);
        assert_eq!(f.color, HEADING_COLOR);
        assert_eq!(StyleSpec::SectionHeading.formatting().color, HEADING_COLOR);
    }

    #[test]
    fn test_style_ids_are_distinct() {
        let mut ids: Vec<_> = StyleSpec::ALL.iter().map(|s| s.style_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), StyleSpec::ALL.len());
    }

    #[test]
    fn test_definitions_match_style_ids() {
        for spec in StyleSpec::ALL {
            assert_eq!(spec.definition().id, spec.style_id());
        }
        assert_eq!(
            StyleSpec::SectionHeading.definition().outline_level,
            Some(0)
        );
    }

    #[test]
    fn test_code_block_styles_every_run() {
        let mut para = Paragraph::new();
        para.add_run("line 1\nline 2");
        para.add_run("");
        code_block(&mut para).unwrap();

        assert_eq!(para.style_id(), Some("SourceCode"));
        assert_eq!(para.props().indent_left, Some(Twips(432)));
        for run in para.runs() {
            assert_eq!(run.props().font.as_deref(), Some(CODE_FONT));
            assert_eq!(run.props().size, Some(FontSize(9)));
        }
        assert_eq!(para.text(), "line 1\nline 2");
    }

    #[test]
    fn test_empty_paragraph_still_styled() {
        let mut para = Paragraph::new();
        code_block(&mut para).unwrap();
        assert_eq!(para.style_id(), Some("SourceCode"));
        assert!(para.runs().is_empty());
    }

    #[test]
    fn test_bullet_item_is_numbered() {
        let mut para = Paragraph::new();
        para.add_run("Generics");
        bullet_item(&mut para).unwrap();

        let numbering = para.numbering().unwrap();
        assert_eq!(numbering.num_id, BULLET_NUM_ID);
        assert_eq!(numbering.level, 0);
        assert_eq!(para.props().indent_left, Some(Twips(720)));
    }

    #[test]
    fn test_label_run_inside_body() {
        let mut para = Paragraph::new();
        para.add_run("Note: ");
        para.add_run("text");
        body_text(&mut para).unwrap();
        apply_run(StyleSpec::BoldLabel, &mut para.runs_mut()[0]).unwrap();

        assert!(para.runs()[0].props().bold);
        assert!(!para.runs()[1].props().bold);
        assert_eq!(para.style_id(), Some("BodyText"));
    }

    #[test]
    fn test_only_bullets_are_numbered() {
        for spec in StyleSpec::ALL {
            let mut para = Paragraph::new();
            apply(spec, &mut para).unwrap();
            assert_eq!(
                para.numbering().is_some(),
                spec == StyleSpec::BulletItem,
                "{:?}",
                spec
            );
        }
    }
}
