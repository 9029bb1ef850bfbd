//! Page text extraction.

mod backend;
mod pages;

pub use backend::{open_backend, LopdfBackend, PdfBackend, PdfExtractBackend};
pub use pages::{PageExtractor, RawPage};
