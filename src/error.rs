//! Error types for the blockifier.

use std::io;
use thiserror::Error;

/// Result type alias for blockifier operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a PDF into blocks.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The request asks for an operation the blockifier does not implement.
    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    /// The bytes are not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted or password-protected.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The configuration names a loader that does not exist.
    #[error("Unknown loader '{0}' (expected one of: lopdf, pdf-extract)")]
    UnknownLoader(String),

    /// The configuration could not be read.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error serializing output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// True for every error meaning "these bytes are not a readable PDF".
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self,
            Error::UnknownFormat | Error::PdfParse(_) | Error::Encrypted | Error::TextExtract(_)
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::UnknownLoader("pdfium".into());
        assert_eq!(
            err.to_string(),
            "Unknown loader 'pdfium' (expected one of: lopdf, pdf-extract)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_malformed_document());
    }

    #[test]
    fn test_malformed_document_kinds() {
        assert!(Error::UnknownFormat.is_malformed_document());
        assert!(Error::Encrypted.is_malformed_document());
        assert!(Error::PdfParse("bad xref".into()).is_malformed_document());
        assert!(Error::TextExtract("page 3".into()).is_malformed_document());
        assert!(!Error::UnsupportedRequest("status".into()).is_malformed_document());
        assert!(!Error::Render("json".into()).is_malformed_document());
    }
}
