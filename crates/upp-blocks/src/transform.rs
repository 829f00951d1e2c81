//! Block transformer: strip custom blocks from source and collect entries.

use crate::entry::{Entry, candidates, is_empty_value};
use crate::error::Result;
use crate::formats::{BlockLang, parse_block};
use crate::parser::find_blocks;

/// Options affecting how blocks are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Format for blocks without a `lang` attribute. Falls back to JSON5.
    pub lang: Option<BlockLang>,
}

/// Outcome of transforming one source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformResult {
    /// Source text with every custom block removed.
    pub content: String,
    /// Entries in block order, then candidate order within each block.
    pub entries: Vec<Entry>,
    /// Whether at least one block parsed to a non-empty value.
    pub changed: bool,
}

/// Transform one component source.
///
/// Every `<project-private>` block is removed from the returned content,
/// including blocks that declare nothing (`null`, `false`, `0`, `""`) and
/// blocks whose `lang` names no known format. The format of each block is
/// its `lang` attribute, else `options.lang`, else JSON5.
///
/// # Errors
///
/// The first block that fails to parse aborts the whole transform.
///
/// # Example
/// ```
/// use upp_blocks::{TransformOptions, transform_code};
///
/// let code = "<project-private>\n{ name: 'Home', query: 'id=1' }\n</project-private>\n<template/>";
/// let result = transform_code(code, "pages/home/index", TransformOptions::default()).unwrap();
///
/// assert!(result.changed);
/// assert_eq!(result.content, "\n<template/>");
/// assert_eq!(result.entries[0].name(), Some(&serde_json::json!("Home")));
/// assert_eq!(result.entries[0].path_name(), "pages/home/index");
/// ```
pub fn transform_code(
    code: &str,
    path_name: &str,
    options: TransformOptions,
) -> Result<TransformResult> {
    let mut content = String::with_capacity(code.len());
    let mut entries = Vec::new();
    let mut changed = false;
    let mut cursor = 0;

    for block in find_blocks(code) {
        content.push_str(&code[cursor..block.range.start]);
        cursor = block.range.end;

        let lang = match block.lang() {
            Some(tag) => match tag.parse::<BlockLang>() {
                Ok(lang) => lang,
                Err(e) => {
                    tracing::warn!(path_name, line = block.start_line, "{e}, block ignored");
                    continue;
                }
            },
            None => options.lang.unwrap_or_default(),
        };

        tracing::debug!(
            path_name,
            line = block.start_line,
            %lang,
            "Parsing project-private block"
        );

        let value = parse_block(lang, &block.body)?;
        if !is_empty_value(&value) {
            changed = true;
            entries.extend(
                candidates(value)
                    .into_iter()
                    .map(|candidate| Entry::from_candidate(candidate, path_name)),
            );
        }
    }
    content.push_str(&code[cursor..]);

    Ok(TransformResult {
        content,
        entries,
        changed,
    })
}
