//! Section renderer
//!
//! Turns one [`SectionSpec`] into its styled elements. The order is fixed:
//! heading, explanation, file references, each code excerpt (caption then
//! listing), closing remark, spacer.

use impldoc_ast::SectionSpec;
use impldoc_ooxml::Paragraph;
use tracing::debug;

use crate::error::Result;
use crate::model::{DocumentModel, Element, ElementKind};
use crate::style::{self, StyleSpec};

/// Label leading the explanation paragraph
pub const EXPLANATION_LABEL: &str = "Explanation";
/// Label leading the file reference paragraph
pub const REFERENCES_LABEL: &str = "Implemented in";
/// Label leading the closing remark
pub const VIVA_LABEL: &str = "Viva Explanation";
/// Separator between file references
pub const REFERENCE_SEPARATOR: &str = ", ";

/// Append the elements of one section to `sink`
pub fn render(section: &SectionSpec, sink: &mut DocumentModel) -> Result<()> {
    debug!(
        title = %section.title,
        references = section.file_references.len(),
        excerpts = section.code_excerpts.len(),
        "rendering section"
    );

    sink.append(heading(&section.title)?);
    sink.append(labeled_body(EXPLANATION_LABEL, &section.explanation)?);
    sink.append(labeled_body(
        REFERENCES_LABEL,
        &section.file_references.join(REFERENCE_SEPARATOR),
    )?);

    for excerpt in &section.code_excerpts {
        if let Some(ref caption) = excerpt.label {
            sink.append(label(caption)?);
        }
        sink.append(code(&excerpt.text)?);
    }

    sink.append(labeled_body(VIVA_LABEL, &section.viva)?);
    sink.append(spacer()?);
    Ok(())
}

/// Centered document title
pub fn title(text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(text);
    style::title(&mut paragraph)?;
    Ok(Element::new(ElementKind::Title, StyleSpec::Title, paragraph))
}

/// Centered line under the title, styled like the title
pub fn subtitle(text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(text);
    style::title(&mut paragraph)?;
    Ok(Element::new(
        ElementKind::Subtitle,
        StyleSpec::Title,
        paragraph,
    ))
}

/// Section heading
pub fn heading(text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(text);
    style::section_heading(&mut paragraph)?;
    Ok(Element::new(
        ElementKind::Heading,
        StyleSpec::SectionHeading,
        paragraph,
    ))
}

/// Body paragraph led by a bold `label: ` run
pub fn labeled_body(label: &str, text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(format!("{}: ", label));
    paragraph.add_run(text);
    style::body_text(&mut paragraph)?;
    style::apply_run(StyleSpec::BoldLabel, &mut paragraph.runs_mut()[0])?;
    Ok(Element::new(ElementKind::Body, StyleSpec::BodyText, paragraph))
}

/// Standalone bold caption
pub fn label(text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(text);
    style::bold_label(&mut paragraph)?;
    Ok(Element::new(
        ElementKind::Label,
        StyleSpec::BoldLabel,
        paragraph,
    ))
}

/// Code listing; the text goes into a single run unchanged
pub fn code(text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(text);
    style::code_block(&mut paragraph)?;
    Ok(Element::new(
        ElementKind::Code,
        StyleSpec::CodeBlock,
        paragraph,
    ))
}

/// Summary list item
pub fn bullet(text: &str) -> Result<Element> {
    let mut paragraph = Paragraph::new();
    paragraph.add_run(text);
    style::bullet_item(&mut paragraph)?;
    Ok(Element::new(
        ElementKind::Bullet,
        StyleSpec::BulletItem,
        paragraph,
    ))
}

/// Blank body paragraph
pub fn spacer() -> Result<Element> {
    let mut paragraph = Paragraph::new();
    style::body_text(&mut paragraph)?;
    Ok(Element::new(
        ElementKind::Spacer,
        StyleSpec::BodyText,
        paragraph,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use impldoc_ast::CodeBlock;

    use crate::model::ElementKind::*;

    fn rendered(section: &SectionSpec) -> DocumentModel {
        let mut model = DocumentModel::new();
        render(section, &mut model).unwrap();
        model
    }

    #[test]
    fn test_render_order() {
        let section = SectionSpec::new("Inheritance")
            .with_explanation("User is the base class.")
            .with_references(["User.java", "Student.java"])
            .with_excerpt(CodeBlock::labeled("Code Snippet", "class Student extends User {}"))
            .with_excerpt(CodeBlock::new("class Teacher extends User {}"))
            .with_viva("IS-A relationship.");

        let model = rendered(&section);
        assert_eq!(
            model.kinds(),
            vec![Heading, Body, Body, Label, Code, Code, Body, Spacer]
        );

        let texts: Vec<_> = model.elements().iter().map(Element::text).collect();
        assert_eq!(texts[0], "Inheritance");
        assert_eq!(texts[1], "Explanation: User is the base class.");
        assert_eq!(texts[2], "Implemented in: User.java, Student.java");
        assert_eq!(texts[3], "Code Snippet");
        assert_eq!(texts[4], "class Student extends User {}");
        assert_eq!(texts[5], "class Teacher extends User {}");
        assert_eq!(texts[6], "Viva Explanation: IS-A relationship.");
        assert_eq!(texts[7], "");
    }

    #[test]
    fn test_render_empty_section() {
        let model = rendered(&SectionSpec::default());
        assert_eq!(model.kinds(), vec![Heading, Body, Body, Body, Spacer]);
        assert_eq!(model.elements()[2].text(), "Implemented in: ");
    }

    #[test]
    fn test_single_reference_has_no_separator() {
        let section = SectionSpec::new("Packages").with_reference("sms.app");
        let model = rendered(&section);

        let references = model.elements()[2].text();
        assert_eq!(references, "Implemented in: sms.app");
        assert_eq!(references.matches(',').count(), 0);
    }

    #[test]
    fn test_references_keep_order_and_duplicates() {
        let section = SectionSpec::new("T").with_references(["b.x", "a.x", "b.x"]);
        let model = rendered(&section);
        assert_eq!(model.elements()[2].text(), "Implemented in: b.x, a.x, b.x");
    }

    #[test]
    fn test_code_text_verbatim() {
        let text = "  if (x) {\n\treturn;\n  }\n";
        let section = SectionSpec::new("T").with_excerpt(CodeBlock::new(text));
        let model = rendered(&section);

        let code = &model.elements()[3];
        assert_eq!(code.kind(), Code);
        assert_eq!(code.style(), StyleSpec::CodeBlock);
        assert_eq!(code.paragraph().runs().len(), 1);
        assert_eq!(code.text(), text);
    }

    #[test]
    fn test_empty_code_block_still_emitted() {
        let section = SectionSpec::new("T").with_excerpt(CodeBlock::new(""));
        let model = rendered(&section);

        let code = &model.elements()[3];
        assert_eq!(code.kind(), Code);
        assert_eq!(code.text(), "");
        assert_eq!(code.paragraph().style_id(), Some("SourceCode"));
    }

    #[test]
    fn test_labeled_body_runs() {
        let element = labeled_body("Explanation", "E").unwrap();
        let runs = element.paragraph().runs();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text(), "Explanation: ");
        assert!(runs[0].props().bold);
        assert_eq!(runs[1].text(), "E");
        assert!(!runs[1].props().bold);
    }

    #[test]
    fn test_spacer_has_no_runs() {
        let element = spacer().unwrap();
        assert_eq!(element.kind(), Spacer);
        assert!(element.paragraph().runs().is_empty());
    }

    #[test]
    fn test_title_and_subtitle_share_style() {
        let t = title("LMS").unwrap();
        let s = subtitle("OOP").unwrap();
        assert_eq!(t.style(), StyleSpec::Title);
        assert_eq!(s.style(), StyleSpec::Title);
        assert_eq!(t.paragraph().props(), s.paragraph().props());
        assert_eq!(s.kind(), Subtitle);
    }
}
