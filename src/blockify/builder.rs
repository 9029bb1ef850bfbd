//! Turning cleaned page text into blocks.

use crate::config::EmptyCheck;
use crate::error::Result;
use crate::extract::RawPage;
use crate::model::Block;
use crate::normalize::{normalize_page_text, null_count};

/// Collects one block per kept page, in arrival order.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<Block>,
    pages_seen: usize,
}

impl BlockBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block for a kept page.
    pub fn push(&mut self, index: usize, text: String) {
        self.blocks.push(Block::for_page(index, text));
    }

    /// Normalize a raw page and append it unless it is blank.
    ///
    /// Returns whether the page was kept.
    pub fn push_raw(&mut self, page: RawPage, check: EmptyCheck) -> bool {
        self.pages_seen += 1;

        let nulls = null_count(&page.text);
        if nulls > 0 {
            log::warn!("Page {}: stripped {} null characters", page.index, nulls);
        }

        match normalize_page_text(&page.text, check) {
            Some(text) => {
                log::debug!("Page {}: kept ({} chars)", page.index, text.chars().count());
                self.push(page.index, text);
                true
            }
            None => {
                log::debug!("Page {}: dropped as blank", page.index);
                false
            }
        }
    }

    /// Pages offered so far, kept or not.
    pub fn pages_seen(&self) -> usize {
        self.pages_seen
    }

    /// Finish and return the blocks.
    pub fn finish(self) -> Vec<Block> {
        self.blocks
    }
}

/// Run pages through normalization and block building.
///
/// The first page error aborts the whole conversion; no partial list of
/// blocks is ever returned.
pub fn blockify_pages<I>(pages: I, check: EmptyCheck) -> Result<Vec<Block>>
where
    I: IntoIterator<Item = Result<RawPage>>,
{
    let mut builder = BlockBuilder::new();
    for page in pages {
        builder.push_raw(page?, check);
    }

    log::debug!(
        "Built {} blocks from {} pages",
        builder.blocks.len(),
        builder.pages_seen()
    );
    Ok(builder.finish())
}
