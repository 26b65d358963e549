//! Read back paragraph text from a written DOCX
//!
//! This is a small scan of `word/document.xml`: it reports each
//! body paragraph's style, list membership and text so a generated package
//! can be checked against what was assembled.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::OoxmlArchive;
use crate::error::{OoxmlError, Result};

/// Text content of one paragraph as found in `word/document.xml`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphText {
    /// Style ID from `w:pStyle`
    pub style_id: Option<String>,
    /// List numbering ID from `w:numId`
    pub num_id: Option<u32>,
    /// Run text with `w:br` as `\n` and `w:tab` as `\t`
    pub text: String,
}

/// Read the paragraphs of a DOCX file on disk
pub fn read_docx_paragraphs<P: AsRef<Path>>(path: P) -> Result<Vec<ParagraphText>> {
    let archive = OoxmlArchive::open(path)?;
    read_paragraphs(archive.document_xml()?)
}

/// Read the paragraphs of a `word/document.xml` part
pub fn read_paragraphs(xml: &[u8]) -> Result<Vec<ParagraphText>> {
    let mut reader = Reader::from_reader(xml);
    // Whitespace inside w:t is content
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<ParagraphText> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => current = Some(ParagraphText::default()),
                b"t" => in_text = current.is_some(),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(ParagraphText::default()),
                b"pStyle" => {
                    if let Some(ref mut para) = current {
                        para.style_id = get_attr(e, b"w:val");
                    }
                }
                b"numId" => {
                    if let Some(ref mut para) = current {
                        para.num_id = get_attr(e, b"w:val").and_then(|v| v.parse().ok());
                    }
                }
                b"br" => {
                    if let Some(ref mut para) = current {
                        para.text.push('\n');
                    }
                }
                b"tab" => {
                    if let Some(ref mut para) = current {
                        para.text.push('\t');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(ref mut para) = current {
                        let text = e.unescape()?;
                        para.text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(para) = current.take() {
                        paragraphs.push(para);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Get attribute value by qualified name
fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_paragraphs() {
        let xml = br#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">a &amp; b</w:t><w:br/><w:tab/><w:t>c</w:t></w:r></w:p>
<w:p/>
<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>item</w:t></w:r></w:p>
</w:body>
</w:document>"#;

        let paragraphs = read_paragraphs(xml).unwrap();
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[0].style_id.as_deref(), Some("Heading1"));
        assert_eq!(paragraphs[0].text, "Intro");
        assert_eq!(paragraphs[1].text, "a & b\n\tc");
        assert_eq!(paragraphs[2], ParagraphText::default());
        assert_eq!(paragraphs[3].num_id, Some(1));
        assert_eq!(paragraphs[3].text, "item");
    }

    #[test]
    fn test_read_paragraphs_malformed() {
        let xml = b"<w:document><w:body><w:p></w:body>";
        assert!(read_paragraphs(xml).is_err());
    }
}
