//! PDF blockifier implementation.

use crate::config::BlockifierConfig;
use crate::detect::{is_pdf_mime_type, PDF_MIME_TYPE};
use crate::error::{Error, Result};
use crate::extract::PageExtractor;
use crate::model::{Block, File};

use super::{blockify_pages, Blockifier, BlockifyRequest, BlockifyResponse};

/// Turns a text PDF into blocks, one per non-blank page.
#[derive(Debug, Clone, Default)]
pub struct PdfBlockifier {
    config: BlockifierConfig,
}

impl PdfBlockifier {
    /// Create a blockifier with the given configuration.
    pub fn new(config: BlockifierConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BlockifierConfig {
        &self.config
    }

    /// Convert raw PDF bytes into blocks.
    ///
    /// Either every page is processed or the call fails as a whole.
    pub fn blockify(&self, data: &[u8]) -> Result<Vec<Block>> {
        let pages = PageExtractor::new(data, self.config.loader)?;
        log::debug!(
            "Blockifying {} pages with {}",
            pages.page_count(),
            self.config.loader
        );
        blockify_pages(pages, self.config.empty_check)
    }
}

impl Blockifier for PdfBlockifier {
    fn name(&self) -> &str {
        "pdf"
    }

    fn supported_mime_types(&self) -> &[&str] {
        &[PDF_MIME_TYPE, "application/x-pdf"]
    }

    fn run(&self, request: &BlockifyRequest) -> Result<BlockifyResponse> {
        log::info!("PDF blockifier received run request");

        if request.is_status_check {
            log::info!("Status check");
            return Err(Error::UnsupportedRequest(
                "PDF Blockifier does not yet support async blockification.".into(),
            ));
        }

        if let Some(mime_type) = request.mime_type.as_deref() {
            if !is_pdf_mime_type(mime_type) {
                log::warn!("Declared MIME type '{}' is not PDF; parsing anyway", mime_type);
            }
        }

        let blocks = self.blockify(&request.data)?;
        log::info!("Produced {} blocks", blocks.len());

        let file = File::new(blocks).with_mime_type(PDF_MIME_TYPE);
        Ok(BlockifyResponse::new(file))
    }
}
