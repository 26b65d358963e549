//! Section and code excerpt definitions
//!
//! A [`SectionSpec`] is one topical unit of a report. It is built once from
//! static literals and never changes afterwards.

use serde::{Deserialize, Serialize};

/// One topical section of a report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Section heading text
    pub title: String,
    /// Explanatory prose shown after the heading
    pub explanation: String,
    /// Source files implementing the topic, in authored order
    #[serde(default)]
    pub file_references: Vec<String>,
    /// Code listings, in authored order
    #[serde(default)]
    pub code_excerpts: Vec<CodeBlock>,
    /// Closing one-paragraph remark
    pub viva: String,
}

/// A labeled block of preformatted text
///
/// `text` is whitespace-significant and is never reflowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Optional caption rendered in bold above the listing
    #[serde(default)]
    pub label: Option<String>,
    /// Verbatim listing text
    pub text: String,
}

impl SectionSpec {
    /// Create a section with a title and no other content
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the explanation text
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Append a file reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.file_references.push(reference.into());
        self
    }

    /// Append several file references, keeping their order
    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_references
            .extend(references.into_iter().map(Into::into));
        self
    }

    /// Append a code excerpt
    pub fn with_excerpt(mut self, excerpt: CodeBlock) -> Self {
        self.code_excerpts.push(excerpt);
        self
    }

    /// Set the closing remark
    pub fn with_viva(mut self, viva: impl Into<String>) -> Self {
        self.viva = viva.into();
        self
    }
}

impl CodeBlock {
    /// Create an unlabeled code block
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    /// Create a code block with a caption
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_reference_order() {
        let section = SectionSpec::new("Generics")
            .with_reference("Repository.java")
            .with_references(["Searchable.java", "Sortable.java", "Repository.java"]);

        assert_eq!(
            section.file_references,
            vec![
                "Repository.java",
                "Searchable.java",
                "Sortable.java",
                "Repository.java"
            ]
        );
    }

    #[test]
    fn test_code_block_constructors() {
        let plain = CodeBlock::new("int x = 1;");
        assert_eq!(plain.label, None);

        let labeled = CodeBlock::labeled("Code Snippet", "  indented\n\tline");
        assert_eq!(labeled.label.as_deref(), Some("Code Snippet"));
        assert_eq!(labeled.text, "  indented\n\tline");
    }

    #[test]
    fn test_section_from_json() {
        let json = r#"{
            "title": "Encapsulation",
            "explanation": "E",
            "file_references": ["A.x", "B.x"],
            "code_excerpts": [{"label": "Example", "text": "L1\nL2"}],
            "viva": "V"
        }"#;

        let section: SectionSpec = serde_json::from_str(json).unwrap();
        assert_eq!(section.title, "Encapsulation");
        assert_eq!(section.code_excerpts[0], CodeBlock::labeled("Example", "L1\nL2"));
    }

    #[test]
    fn test_section_from_json_defaults() {
        let json = r#"{"title": "T", "explanation": "", "viva": ""}"#;

        let section: SectionSpec = serde_json::from_str(json).unwrap();
        assert!(section.file_references.is_empty());
        assert!(section.code_excerpts.is_empty());
    }
}
