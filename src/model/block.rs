//! Block and tag types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag kind for document-structure annotations.
pub const TAG_KIND_DOCUMENT: &str = "document";

/// Tag name marking the source page of a block.
pub const TAG_NAME_PAGE: &str = "page";

/// Key of a numeric tag value.
pub const TAG_VALUE_NUMBER: &str = "number-value";

/// One kept page: its cleaned text plus metadata tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Cleaned page text
    pub text: String,

    /// Metadata annotations
    pub tags: Vec<Tag>,
}

impl Block {
    /// Create a block tagged with its zero-based source page.
    pub fn for_page(index: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: vec![Tag::page(index)],
        }
    }

    /// Source page index, read back from the page tag.
    pub fn page_number(&self) -> Option<usize> {
        self.tags.iter().find_map(Tag::page_number)
    }

    /// Number of characters in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// A key/value annotation attached to a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag family, e.g. "document"
    pub kind: String,

    /// Tag name within the family, e.g. "page"
    pub name: String,

    /// Structured value
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub value: Map<String, Value>,
}

impl Tag {
    /// Create a tag with an empty value.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            value: Map::new(),
        }
    }

    /// Page-number tag.
    pub fn page(index: usize) -> Self {
        Self::new(TAG_KIND_DOCUMENT, TAG_NAME_PAGE).with_value(TAG_VALUE_NUMBER, index)
    }

    /// Add a value entry.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.value.insert(key.into(), value.into());
        self
    }

    /// The page index if this is a page tag.
    pub fn page_number(&self) -> Option<usize> {
        if self.kind != TAG_KIND_DOCUMENT || self.name != TAG_NAME_PAGE {
            return None;
        }
        self.value
            .get(TAG_VALUE_NUMBER)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
    }
}
