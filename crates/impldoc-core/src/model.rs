//! In-memory document model
//!
//! A [`DocumentModel`] is the ordered sequence of styled elements that makes
//! up a report. It only grows: elements are appended and can be read back,
//! never edited or removed. It is turned into an OOXML [`Document`] exactly
//! once, by value.

use impldoc_ooxml::{CoreProperties, Document, Paragraph};

use crate::style::StyleSpec;

/// What an element represents in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Document title
    Title,
    /// Line under the title
    Subtitle,
    /// Section or summary heading
    Heading,
    /// Prose paragraph, usually led by a bold label
    Body,
    /// Caption above a code listing
    Label,
    /// Code listing
    Code,
    /// Summary list item
    Bullet,
    /// Blank paragraph between sections
    Spacer,
}

/// One styled element of the report
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    style: StyleSpec,
    paragraph: Paragraph,
}

impl Element {
    /// Wrap an already styled paragraph
    pub fn new(kind: ElementKind, style: StyleSpec, paragraph: Paragraph) -> Self {
        Self {
            kind,
            style,
            paragraph,
        }
    }

    /// Element kind
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Formatting intent the paragraph was styled with
    pub fn style(&self) -> StyleSpec {
        self.style
    }

    /// The styled paragraph
    pub fn paragraph(&self) -> &Paragraph {
        &self.paragraph
    }

    /// Plain text of the element
    pub fn text(&self) -> String {
        self.paragraph.text()
    }
}

/// Ordered, append-only collection of styled elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentModel {
    elements: Vec<Element>,
}

impl DocumentModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element at the end
    pub fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Elements in document order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the model is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Kinds of all elements, in order
    pub fn kinds(&self) -> Vec<ElementKind> {
        self.elements.iter().map(Element::kind).collect()
    }

    /// Convert into an OOXML document, declaring every paragraph style
    pub fn into_document(self, properties: CoreProperties) -> Document {
        let mut document = Document::new();
        document.properties = properties;
        for spec in StyleSpec::ALL {
            document.add_style(spec.definition());
        }
        for element in self.elements {
            document.push(element.paragraph);
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: ElementKind, text: &str) -> Element {
        let mut paragraph = Paragraph::new();
        paragraph.add_run(text);
        Element::new(kind, StyleSpec::BodyText, paragraph)
    }

    #[test]
    fn test_empty_model() {
        let model = DocumentModel::new();
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut model = DocumentModel::new();
        model.append(element(ElementKind::Heading, "one"));
        model.append(element(ElementKind::Body, "two"));
        model.append(element(ElementKind::Spacer, ""));

        assert_eq!(
            model.kinds(),
            vec![ElementKind::Heading, ElementKind::Body, ElementKind::Spacer]
        );
        assert_eq!(model.elements()[1].text(), "two");
    }

    #[test]
    fn test_into_document() {
        let mut model = DocumentModel::new();
        model.append(element(ElementKind::Body, "a"));
        model.append(element(ElementKind::Body, "b"));

        let properties = CoreProperties {
            title: Some("T".to_string()),
            ..Default::default()
        };
        let document = model.into_document(properties);

        assert_eq!(document.len(), 2);
        assert_eq!(document.paragraphs()[1].text(), "b");
        assert_eq!(document.styles().len(), StyleSpec::ALL.len());
        assert_eq!(document.properties.title.as_deref(), Some("T"));
    }
}
