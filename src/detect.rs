//! PDF header sniffing and MIME type helpers.

use crate::error::{Error, Result};

/// MIME type of PDF documents.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Readers accept the header anywhere in the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Read the PDF version from the file header.
///
/// Returns `Error::UnknownFormat` when no `%PDF-x.y` header is found
/// near the start of the data.
///
/// # Example
/// ```
/// use pdf_blockifier::detect::pdf_version;
///
/// assert_eq!(pdf_version(b"%PDF-1.7\n...").unwrap(), "1.7");
/// assert!(pdf_version(b"<html>").is_err());
/// ```
pub fn pdf_version(data: &[u8]) -> Result<String> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version_start = start + PDF_MAGIC.len();
    let version_bytes = data
        .get(version_start..version_start + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnknownFormat);
    }
    Ok(version)
}

/// Check if a version string looks like "1.4" or "2.0".
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_ok()
}

/// Check if a declared MIME type names PDF.
///
/// Parameters such as `; charset=binary` and letter case are ignored.
pub fn is_pdf_mime_type(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(PDF_MIME_TYPE) || essence.eq_ignore_ascii_case("application/x-pdf")
}
