//! Error types for pdf-outline.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building an outline.
///
/// An empty document is not an error: it yields an empty
/// [`OutlineDocument`](crate::OutlineDocument).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external extractor could not produce a glyph stream.
    #[error("Document unreadable: {0}")]
    DocumentUnreadable(String),

    /// A configuration value is out of range or inconsistent.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DocumentUnreadable("report.json: expected value".to_string());
        assert_eq!(
            err.to_string(),
            "Document unreadable: report.json: expected value"
        );

        let err = Error::InvalidOption("h2_delta exceeds h1_delta".to_string());
        assert_eq!(err.to_string(), "Invalid option: h2_delta exceeds h1_delta");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
