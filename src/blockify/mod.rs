//! Blockification: the request/response surface around the page pipeline.
//!
//! A [`Blockifier`] takes a [`BlockifyRequest`] carrying raw document bytes
//! and returns a [`BlockifyResponse`] holding one [`File`] of blocks.
//!
//! # Example
//!
//! ```no_run
//! use pdf_blockifier::blockify::{Blockifier, BlockifyRequest, PdfBlockifier};
//!
//! fn main() -> pdf_blockifier::Result<()> {
//!     let data = std::fs::read("document.pdf")?;
//!     let blockifier = PdfBlockifier::default();
//!
//!     let response = blockifier.run(&BlockifyRequest::pdf(data))?;
//!     for block in &response.file.blocks {
//!         println!("page {:?}: {}", block.page_number(), block.text);
//!     }
//!     Ok(())
//! }
//! ```

mod builder;
mod pdf;

pub use builder::{blockify_pages, BlockBuilder};
pub use pdf::PdfBlockifier;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BlockifierConfig;
use crate::detect::PDF_MIME_TYPE;
use crate::error::Result;
use crate::model::File;

/// A request to turn one document into blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockifyRequest {
    /// Raw document bytes
    pub data: Vec<u8>,

    /// MIME type declared by the caller
    pub mime_type: Option<String>,

    /// Asynchronous status-check request rather than a conversion
    pub is_status_check: bool,
}

impl BlockifyRequest {
    /// Create a request for raw bytes with no declared type.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Create a request for bytes declared as `application/pdf`.
    pub fn pdf(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data).with_mime_type(PDF_MIME_TYPE)
    }

    /// Create a status-check request.
    pub fn status_check() -> Self {
        Self {
            is_status_check: true,
            ..Self::default()
        }
    }

    /// Set the declared MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Result of a successful blockification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockifyResponse {
    /// The blocks, wrapped in a single file
    pub file: File,
}

impl BlockifyResponse {
    /// Wrap a file.
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

/// Trait for document blockifiers.
///
/// Implement this trait to blockify another document format.
pub trait Blockifier: Send + Sync {
    /// Name of this blockifier.
    fn name(&self) -> &str;

    /// MIME types this blockifier reads.
    fn supported_mime_types(&self) -> &[&str];

    /// Handle one request.
    fn run(&self, request: &BlockifyRequest) -> Result<BlockifyResponse>;

    /// Check if this blockifier reads the given MIME type.
    fn supports_mime_type(&self, mime_type: &str) -> bool {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        self.supported_mime_types()
            .iter()
            .any(|m| m.eq_ignore_ascii_case(essence))
    }
}

/// Blockify several independent PDFs in parallel.
///
/// Each document succeeds or fails on its own; results come back in input
/// order.
pub fn blockify_batch(documents: &[&[u8]], config: &BlockifierConfig) -> Vec<Result<File>> {
    let blockifier = PdfBlockifier::new(config.clone());
    documents
        .par_iter()
        .map(|data| blockifier.blockify(data).map(File::new))
        .collect()
}
