//! Block location for `<project-private>` custom blocks.
//!
//! Finds every block of the form:
//! ```text
//! <project-private lang="json5">
//! { name: 'Home' }
//! </project-private>
//! ```
//!
//! The body is captured non-greedily, so two blocks in one file never merge
//! into a single match. Nested blocks are not supported.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Closing tag literal. Cheap to search for before running the regex.
pub const BLOCK_CLOSE_TAG: &str = "</project-private>";

static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<project-private([^>]*)>(.*?)</project-private>")
        .expect("Invalid block regex")
});

/// `lang` attribute, single or double quoted.
static LANG_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\slang=(?:"([A-Za-z0-9_]+)"|'([A-Za-z0-9_]+)')"#)
        .expect("Invalid lang attribute regex")
});

/// One custom block found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOccurrence {
    /// Raw attribute text of the opening tag (may be empty).
    pub attributes: String,
    /// Block body with surrounding whitespace trimmed.
    pub body: String,
    /// Byte range of the whole block, opening tag through closing tag.
    pub range: Range<usize>,
    /// The 1-based line number of the opening tag.
    pub start_line: usize,
}

impl BlockOccurrence {
    /// The `lang` attribute of the opening tag, if present.
    pub fn lang(&self) -> Option<&str> {
        lang_attribute(&self.attributes)
    }
}

/// Extract the value of a quoted `lang` attribute.
///
/// # Example
/// ```
/// use upp_blocks::parser::lang_attribute;
///
/// assert_eq!(lang_attribute(r#" lang="yaml""#), Some("yaml"));
/// assert_eq!(lang_attribute(" lang='json'"), Some("json"));
/// assert_eq!(lang_attribute(" setup"), None);
/// ```
pub fn lang_attribute(attributes: &str) -> Option<&str> {
    let caps = LANG_ATTR_REGEX.captures(attributes)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Whether the text may contain a custom block.
pub fn has_block_marker(content: &str) -> bool {
    content.contains(BLOCK_CLOSE_TAG)
}

/// Find all custom blocks in `content`, in order of appearance.
///
/// # Example
/// ```
/// use upp_blocks::parser::find_blocks;
///
/// let content = "<project-private lang=\"yaml\">\nname: Home\n</project-private>\n<template/>";
/// let blocks = find_blocks(content);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].lang(), Some("yaml"));
/// assert_eq!(blocks[0].body, "name: Home");
/// ```
pub fn find_blocks(content: &str) -> Vec<BlockOccurrence> {
    BLOCK_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let attributes = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());

            Some(BlockOccurrence {
                attributes: attributes.to_string(),
                body: body.trim().to_string(),
                range: whole.range(),
                start_line: content[..whole.start()].matches('\n').count() + 1,
            })
        })
        .collect()
}
