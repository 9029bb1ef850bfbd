//! Output model: blocks, tags and the file that holds them.

mod block;
mod file;

pub use block::{Block, Tag, TAG_KIND_DOCUMENT, TAG_NAME_PAGE, TAG_VALUE_NUMBER};
pub use file::File;
