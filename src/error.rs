//! Error types for reportforge.

use std::io;
use thiserror::Error;

/// Result type alias for reportforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or persisting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the output artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A table was given no rows, or a first row without cells.
    #[error("Table must have at least one row and one column")]
    EmptyTable,

    /// A table row does not have the same number of cells as the first row.
    #[error("Table row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        /// Zero-based index of the offending row
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        found: usize,
    },

    /// Heading level outside 1..=3.
    #[error("Invalid heading level: {0} (expected 1, 2 or 3)")]
    InvalidHeadingLevel(u8),

    /// The style sheet cannot serve as a document default.
    #[error("Invalid style sheet: {0}")]
    InvalidStyle(String),

    /// Error writing the DOCX zip container.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Error during rendering (DOCX, Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No backend is registered for the requested format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// An outline description could not be read.
    #[error("Outline error: {0}")]
    Outline(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}

impl Error {
    /// Whether the error was caused by malformed block input rather than the backend.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::EmptyTable | Error::RaggedTable { .. } | Error::InvalidHeadingLevel(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyTable;
        assert_eq!(
            err.to_string(),
            "Table must have at least one row and one column"
        );

        let err = Error::RaggedTable {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "Table row 2 has 1 cells, expected 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_structural_errors() {
        assert!(Error::EmptyTable.is_structural());
        assert!(Error::InvalidHeadingLevel(4).is_structural());
        assert!(!Error::Render("x".into()).is_structural());
    }
}
