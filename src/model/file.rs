//! File container for blocks.

use serde::{Deserialize, Serialize};

use super::Block;

/// Ordered blocks produced from one source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// MIME type of the source document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Blocks in ascending page order
    pub blocks: Vec<Block>,
}

impl File {
    /// Create a file from blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            mime_type: None,
            blocks,
        }
    }

    /// Set the source MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the file has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Page indices of the blocks, in block order.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.blocks.iter().filter_map(Block::page_number).collect()
    }

    /// All block text joined with blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_new() {
        let file = File::new(vec![Block::for_page(0, "a"), Block::for_page(2, "c")]);
        assert_eq!(file.block_count(), 2);
        assert!(!file.is_empty());
        assert_eq!(file.page_numbers(), vec![0, 2]);
        assert_eq!(file.plain_text(), "a\n\nc");
    }

    #[test]
    fn test_file_mime_type_skipped_when_unset() {
        let json = serde_json::to_string(&File::default()).unwrap();
        assert_eq!(json, r#"{"blocks":[]}"#);

        let json = serde_json::to_string(&File::default().with_mime_type("application/pdf")).unwrap();
        assert!(json.contains("\"mime_type\":\"application/pdf\""));
    }
}
