//! Lazy, ordered iteration over page text.

use crate::config::Loader;
use crate::error::Result;

use super::backend::{open_backend, PdfBackend};

/// Text pulled from one page, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    /// Zero-based page index
    pub index: usize,
    /// Text as the backend produced it
    pub text: String,
}

impl RawPage {
    /// Create a raw page.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Yields `(index, raw_text)` for every page in document order.
///
/// Indices start at 0 and increase by one. The first extraction error is
/// yielded once and ends the sequence; an extractor is consumed by
/// iteration and cannot be restarted.
///
/// # Example
///
/// ```no_run
/// use pdf_blockifier::{Loader, PageExtractor};
///
/// let data = std::fs::read("document.pdf")?;
/// for page in PageExtractor::new(&data, Loader::Lopdf)? {
///     let page = page?;
///     println!("{}: {} chars", page.index, page.text.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PageExtractor {
    backend: Box<dyn PdfBackend>,
    next: usize,
    failed: bool,
}

impl PageExtractor {
    /// Load `data` with the given loader.
    ///
    /// Malformed, truncated and encrypted documents fail here.
    pub fn new(data: &[u8], loader: Loader) -> Result<Self> {
        Ok(Self::from_backend(open_backend(data, loader)?))
    }

    /// Iterate over pages of an already-loaded backend.
    pub fn from_backend(backend: Box<dyn PdfBackend>) -> Self {
        Self {
            backend,
            next: 0,
            failed: false,
        }
    }

    /// Total number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.backend.page_count()
    }
}

impl Iterator for PageExtractor {
    type Item = Result<RawPage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.backend.page_count() {
            return None;
        }

        let index = self.next;
        self.next += 1;

        match self.backend.page_text(index) {
            Ok(text) => Some(Ok(RawPage::new(index, text))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.backend.page_count().saturating_sub(self.next);
        (0, Some(remaining))
    }
}

impl std::iter::FusedIterator for PageExtractor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// In-memory backend; `None` entries fail extraction.
    struct FakeBackend(Vec<Option<&'static str>>);

    impl PdfBackend for FakeBackend {
        fn page_count(&self) -> usize {
            self.0.len()
        }

        fn page_text(&mut self, index: usize) -> Result<String> {
            self.0[index]
                .map(str::to_string)
                .ok_or_else(|| Error::TextExtract(format!("Page {}", index)))
        }
    }

    #[test]
    fn test_pages_in_order_from_zero() {
        let extractor =
            PageExtractor::from_backend(Box::new(FakeBackend(vec![Some("a"), Some(""), Some("c")])));
        assert_eq!(extractor.page_count(), 3);

        let pages: Vec<RawPage> = extractor.collect::<Result<_>>().unwrap();
        assert_eq!(
            pages,
            vec![RawPage::new(0, "a"), RawPage::new(1, ""), RawPage::new(2, "c")]
        );
    }

    #[test]
    fn test_stops_after_first_error() {
        let mut extractor =
            PageExtractor::from_backend(Box::new(FakeBackend(vec![Some("a"), None, Some("c")])));

        assert!(matches!(extractor.next(), Some(Ok(_))));
        assert!(matches!(extractor.next(), Some(Err(Error::TextExtract(_)))));
        assert!(extractor.next().is_none());
        assert!(extractor.next().is_none());
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let mut extractor = PageExtractor::from_backend(Box::new(FakeBackend(vec![])));
        assert_eq!(extractor.size_hint(), (0, Some(0)));
        assert!(extractor.next().is_none());
    }

    #[test]
    fn test_new_rejects_non_pdf() {
        let result = PageExtractor::new(b"plain text", Loader::Lopdf);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }
}
