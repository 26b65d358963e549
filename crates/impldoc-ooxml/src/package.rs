//! Fixed package parts of a WordprocessingML document
//!
//! Everything in a DOCX other than `word/document.xml` is generated here:
//! content types, relationships, the style sheet, the bullet list
//! definition and the core properties.

use quick_xml::escape::escape;

use crate::document::{CoreProperties, StyleDefinition};

/// Path of the main document part
pub const DOCUMENT_PATH: &str = "word/document.xml";
/// Path of the style sheet part
pub const STYLES_PATH: &str = "word/styles.xml";
/// Path of the numbering part
pub const NUMBERING_PATH: &str = "word/numbering.xml";
/// Path of the core properties part
pub const CORE_PATH: &str = "docProps/core.xml";
/// Path of the content types part
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
/// Path of the package relationships part
pub const ROOT_RELS_PATH: &str = "_rels/.rels";
/// Path of the document relationships part
pub const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";

/// `w:numId` of the single bullet list defined in `word/numbering.xml`
pub const BULLET_NUM_ID: u32 = 1;

/// Font used by the document defaults
pub const DEFAULT_FONT: &str = "Calibri";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Generate `[Content_Types].xml`
pub fn content_types_xml() -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push('\n');
    xml.push_str("</Types>");
    xml
}

/// Generate `_rels/.rels`
pub fn root_rels_xml() -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    xml.push('\n');
    xml.push_str(r#"  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#);
    xml.push('\n');
    xml.push_str("</Relationships>");
    xml
}

/// Generate `word/_rels/document.xml.rels`
pub fn document_rels_xml() -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    xml.push('\n');
    xml.push_str(r#"  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>"#);
    xml.push('\n');
    xml.push_str("</Relationships>");
    xml
}

/// Generate `word/styles.xml` declaring `Normal` plus the given styles
///
/// Declared styles are based on `Normal`; a declaration with ID `Normal`
/// is skipped since the default style is always written.
pub fn styles_xml(styles: &[StyleDefinition]) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#);
    xml.push('\n');

    // Document defaults
    xml.push_str("  <w:docDefaults>\n");
    xml.push_str("    <w:rPrDefault><w:rPr>");
    xml.push_str(&format!(
        "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:eastAsia=\"{0}\" w:cs=\"{0}\"/>",
        DEFAULT_FONT
    ));
    xml.push_str("<w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/>");
    xml.push_str("</w:rPr></w:rPrDefault>\n");
    xml.push_str("    <w:pPrDefault><w:pPr><w:spacing w:after=\"0\"/></w:pPr></w:pPrDefault>\n");
    xml.push_str("  </w:docDefaults>\n");

    xml.push_str(
        "  <w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/><w:qFormat/></w:style>\n",
    );

    for style in styles.iter().filter(|s| s.id != "Normal") {
        xml.push_str(&format!(
            "  <w:style w:type=\"paragraph\" w:styleId=\"{}\">",
            escape(style.id.as_str())
        ));
        xml.push_str(&format!("<w:name w:val=\"{}\"/>", escape(style.name.as_str())));
        xml.push_str("<w:basedOn w:val=\"Normal\"/><w:next w:val=\"Normal\"/><w:qFormat/>");
        if let Some(level) = style.outline_level {
            xml.push_str(&format!(
                "<w:pPr><w:keepNext/><w:outlineLvl w:val=\"{}\"/></w:pPr>",
                level
            ));
        }
        xml.push_str("</w:style>\n");
    }

    xml.push_str("</w:styles>");
    xml
}

/// Generate `word/numbering.xml` with a single-level bullet list
pub fn numbering_xml() -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#);
    xml.push('\n');
    xml.push_str("  <w:abstractNum w:abstractNumId=\"0\">\n");
    xml.push_str("    <w:multiLevelType w:val=\"singleLevel\"/>\n");
    xml.push_str("    <w:lvl w:ilvl=\"0\">");
    xml.push_str("<w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/>");
    xml.push_str("<w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/>");
    xml.push_str("<w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr>");
    xml.push_str("</w:lvl>\n");
    xml.push_str("  </w:abstractNum>\n");
    xml.push_str(&format!(
        "  <w:num w:numId=\"{}\"><w:abstractNumId w:val=\"0\"/></w:num>\n",
        BULLET_NUM_ID
    ));
    xml.push_str("</w:numbering>");
    xml
}

/// Generate `docProps/core.xml`
///
/// No creation or modification dates are written, so the part depends only
/// on the given properties.
pub fn core_xml(props: &CoreProperties) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    xml.push('\n');
    if let Some(ref title) = props.title {
        xml.push_str(&format!("  <dc:title>{}</dc:title>\n", escape(title.as_str())));
    }
    if let Some(ref subject) = props.subject {
        xml.push_str(&format!(
            "  <dc:subject>{}</dc:subject>\n",
            escape(subject.as_str())
        ));
    }
    if let Some(ref creator) = props.creator {
        xml.push_str(&format!(
            "  <dc:creator>{}</dc:creator>\n",
            escape(creator.as_str())
        ));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_cover_all_parts() {
        let xml = content_types_xml();
        assert!(xml.contains("/word/document.xml"));
        assert!(xml.contains("/word/styles.xml"));
        assert!(xml.contains("/word/numbering.xml"));
        assert!(xml.contains("/docProps/core.xml"));
    }

    #[test]
    fn test_rels_targets() {
        assert!(root_rels_xml().contains("Target=\"word/document.xml\""));
        assert!(root_rels_xml().contains("Target=\"docProps/core.xml\""));
        assert!(document_rels_xml().contains("Target=\"styles.xml\""));
        assert!(document_rels_xml().contains("Target=\"numbering.xml\""));
    }

    #[test]
    fn test_styles_xml_declares_styles() {
        let styles = vec![
            StyleDefinition::new("Normal", "Normal"),
            StyleDefinition::new("Heading1", "heading 1").with_outline_level(0),
            StyleDefinition::new("SourceCode", "Source Code"),
        ];
        let xml = styles_xml(&styles);

        assert_eq!(xml.matches("w:styleId=\"Normal\"").count(), 1);
        assert!(xml.contains("w:styleId=\"Heading1\""));
        assert!(xml.contains("<w:outlineLvl w:val=\"0\"/>"));
        assert!(xml.contains("w:styleId=\"SourceCode\""));
        assert!(xml.contains("<w:name w:val=\"Source Code\"/>"));
    }

    #[test]
    fn test_numbering_defines_bullet() {
        let xml = numbering_xml();
        assert!(xml.contains("<w:numFmt w:val=\"bullet\"/>"));
        assert!(xml.contains(&format!("w:numId=\"{}\"", BULLET_NUM_ID)));
    }

    #[test]
    fn test_core_xml_escapes_and_skips_missing() {
        let props = CoreProperties {
            title: Some("Q&A <draft>".to_string()),
            subject: None,
            creator: Some("impldoc".to_string()),
        };
        let xml = core_xml(&props);

        assert!(xml.contains("<dc:title>Q&amp;A &lt;draft&gt;</dc:title>"));
        assert!(!xml.contains("dc:subject"));
        assert!(xml.contains("<dc:creator>impldoc</dc:creator>"));
        assert!(!xml.contains("dcterms:created"));
    }
}
