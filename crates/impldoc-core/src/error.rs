//! Error types for report generation

use std::path::PathBuf;

use impldoc_ooxml::OoxmlError;
use thiserror::Error;

/// Errors that abort report generation
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The document model rejected a style parameter
    #[error("Styling failure: {0}")]
    Styling(#[from] OoxmlError),

    /// The finished document could not be written
    #[error("Serialization failure writing {}: {}", .path.display(), .source)]
    Serialization {
        /// Target file
        path: PathBuf,
        /// Underlying packaging or IO error
        #[source]
        source: OoxmlError,
    },
}

/// Result type for report generation
pub type Result<T> = std::result::Result<T, GenerateError>;
