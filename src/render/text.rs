//! Plain text rendering of blocks.

use crate::model::File;

/// Render blocks as plain text.
///
/// With `page_markers`, each block is preceded by a line naming its source
/// page (1-based for readers; the tag itself stays zero-based).
pub fn to_text(file: &File, page_markers: bool) -> String {
    if !page_markers {
        return file.plain_text();
    }

    let mut output = String::new();
    for block in &file.blocks {
        if !output.is_empty() {
            output.push('\n');
        }
        match block.page_number() {
            Some(index) => output.push_str(&format!("--- Page {} ---\n", index + 1)),
            None => output.push_str("--- Page ? ---\n"),
        }
        output.push_str(&block.text);
        if !block.text.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_to_text_plain() {
        let file = File::new(vec![Block::for_page(0, "Hello"), Block::for_page(1, "World")]);
        assert_eq!(to_text(&file, false), "Hello\n\nWorld");
    }

    #[test]
    fn test_to_text_with_markers() {
        let file = File::new(vec![Block::for_page(0, "Hello\n"), Block::for_page(2, "World")]);
        assert_eq!(
            to_text(&file, true),
            "--- Page 1 ---\nHello\n\n--- Page 3 ---\nWorld\n"
        );
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&File::default(), true), "");
    }
}
