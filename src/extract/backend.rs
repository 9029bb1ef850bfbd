//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for per-page text extraction, isolating
//! the concrete PDF libraries (lopdf, pdf-extract) from blockification.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document as LopdfDocument;

use crate::config::Loader;
use crate::detect::pdf_version;
use crate::error::{Error, Result};

/// Abstract interface for reading page text out of a loaded PDF.
///
/// Pages are addressed by zero-based index in document order.
pub trait PdfBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the raw text of one page.
    fn page_text(&mut self, index: usize) -> Result<String>;
}

/// Load `data` with the backend named by `loader`.
///
/// Fails with `Error::UnknownFormat` before touching the parser when the
/// bytes carry no PDF header.
pub fn open_backend(data: &[u8], loader: Loader) -> Result<Box<dyn PdfBackend>> {
    let version = pdf_version(data)?;
    log::debug!("Loading PDF {} ({} bytes) with {}", version, data.len(), loader);

    Ok(match loader {
        Loader::Lopdf => Box::new(LopdfBackend::load_bytes(data)?),
        Loader::PdfExtract => Box::new(PdfExtractBackend::load_bytes(data)?),
    })
}

// ---------------------------------------------------------------------------
// LopdfBackend: pages are extracted one at a time, on demand
// ---------------------------------------------------------------------------

/// [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
    /// lopdf's 1-based page numbers, ascending
    page_numbers: Vec<u32>,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        let page_numbers = doc.get_pages().into_keys().collect();
        Ok(Self { doc, page_numbers })
    }
}

impl PdfBackend for LopdfBackend {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        let page_number = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| Error::TextExtract(format!("Page index {} out of range", index)))?;

        self.doc
            .extract_text(&[page_number])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", index, e)))
    }
}

// ---------------------------------------------------------------------------
// PdfExtractBackend: the whole document is extracted at load time
// ---------------------------------------------------------------------------

/// [`PdfBackend`] backed by the `pdf-extract` crate.
///
/// pdf-extract only offers whole-document extraction, so every page's text
/// is produced up front and handed out by index afterwards.
pub struct PdfExtractBackend {
    pages: Vec<Option<String>>,
}

impl PdfExtractBackend {
    /// Extract every page of an in-memory PDF.
    ///
    /// pdf-extract panics on some malformed input; those panics come back
    /// as `Error::PdfParse`.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => return Err(classify_extract_error(e)),
            Err(_) => {
                return Err(Error::PdfParse(
                    "pdf-extract panicked (malformed document)".into(),
                ))
            }
        };

        Ok(Self {
            pages: pages.into_iter().map(Some).collect(),
        })
    }
}

/// Load failures inside pdf-extract are parse errors, not extraction errors.
fn classify_extract_error(err: pdf_extract::OutputError) -> Error {
    match err {
        pdf_extract::OutputError::PdfError(e) => Error::PdfParse(e.to_string()),
        other => Error::from(other),
    }
}

impl PdfBackend for PdfExtractBackend {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        self.pages
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| Error::TextExtract(format!("Page index {} out of range", index)))
    }
}
