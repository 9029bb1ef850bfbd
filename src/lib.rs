//! # pdf-blockifier
//!
//! Turns text PDFs into blocks: one block per non-blank page, each tagged
//! with the zero-based index of the page it came from. The output is meant
//! for indexing and embedding pipelines.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_blockifier::blockify_file;
//!
//! fn main() -> pdf_blockifier::Result<()> {
//!     let blocks = blockify_file("document.pdf")?;
//!     for block in &blocks {
//!         println!("page {:?}: {}", block.page_number(), block.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`PageExtractor`] yields `(index, raw_text)` per page, in order
//! - [`normalize_page_text`] drops blank pages and strips null characters
//! - [`BlockBuilder`] tags each kept page with its page number
//!
//! A conversion either returns every block or fails as a whole.

pub mod blockify;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use blockify::{
    blockify_batch, blockify_pages, BlockBuilder, Blockifier, BlockifyRequest, BlockifyResponse,
    PdfBlockifier,
};
pub use config::{BlockifierConfig, EmptyCheck, Loader};
pub use detect::{is_pdf_bytes, is_pdf_mime_type, pdf_version};
pub use error::{Error, Result};
pub use extract::{PageExtractor, PdfBackend, RawPage};
pub use model::{Block, File, Tag};
pub use normalize::normalize_page_text;
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Blockify PDF bytes with the default configuration.
///
/// # Example
///
/// ```no_run
/// use pdf_blockifier::blockify_bytes;
///
/// let data = std::fs::read("document.pdf").unwrap();
/// let blocks = blockify_bytes(&data).unwrap();
/// ```
pub fn blockify_bytes(data: &[u8]) -> Result<Vec<Block>> {
    blockify_bytes_with_config(data, &BlockifierConfig::default())
}

/// Blockify PDF bytes with a custom configuration.
///
/// # Example
///
/// ```no_run
/// use pdf_blockifier::{blockify_bytes_with_config, BlockifierConfig, Loader};
///
/// let data = std::fs::read("document.pdf").unwrap();
/// let config = BlockifierConfig::new().with_loader(Loader::PdfExtract);
/// let blocks = blockify_bytes_with_config(&data, &config).unwrap();
/// ```
pub fn blockify_bytes_with_config(data: &[u8], config: &BlockifierConfig) -> Result<Vec<Block>> {
    PdfBlockifier::new(config.clone()).blockify(data)
}

/// Blockify a PDF file.
pub fn blockify_file<P: AsRef<Path>>(path: P) -> Result<Vec<Block>> {
    blockify_file_with_config(path, &BlockifierConfig::default())
}

/// Blockify a PDF file with a custom configuration.
pub fn blockify_file_with_config<P: AsRef<Path>>(
    path: P,
    config: &BlockifierConfig,
) -> Result<Vec<Block>> {
    let data = std::fs::read(path)?;
    blockify_bytes_with_config(&data, config)
}

/// Blockify a PDF from a reader.
///
/// # Example
///
/// ```no_run
/// use pdf_blockifier::blockify_reader;
/// use std::fs::File;
///
/// let file = File::open("document.pdf").unwrap();
/// let blocks = blockify_reader(file).unwrap();
/// ```
pub fn blockify_reader<R: Read>(mut reader: R) -> Result<Vec<Block>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    blockify_bytes(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_blockify_bytes_empty_data() {
        let result = blockify_bytes(&[]);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_blockify_bytes_too_short() {
        let result = blockify_bytes(b"%PDF");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_blockify_bytes_unknown_magic() {
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let result = blockify_bytes(&data);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_malformed_document());
    }

    #[test]
    fn test_blockify_bytes_header_only() {
        // Valid header, nothing parseable after it
        let result = blockify_bytes(b"%PDF-1.7\n%%EOF\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_blockify_reader_non_pdf() {
        let result = blockify_reader(&b"<html></html>"[..]);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_blockify_file_missing() {
        let result = blockify_file("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
