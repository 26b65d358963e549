//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur during OOXML operations
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A styling value was rejected
    #[error("Invalid {property}: {value}")]
    InvalidStyle {
        /// The property being set (font, size, indent, ...)
        property: &'static str,
        /// The rejected value
        value: String,
    },

    /// Required file not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),
}

impl OoxmlError {
    /// Shorthand for an [`OoxmlError::InvalidStyle`]
    pub(crate) fn invalid_style(property: &'static str, value: impl ToString) -> Self {
        Self::InvalidStyle {
            property,
            value: value.to_string(),
        }
    }
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
