//! Wikilink and inline-tag extraction
//!
//! Obsidian-style references in body text:
//! - Basic wikilinks: `[[note]]`
//! - Wikilinks with aliases: `[[note|alias]]`
//! - Wikilinks with headings: `[[note#heading]]`
//! - Wikilinks with block references: `[[note#^block-id]]`
//! - Embeds: `![[note]]`
//! - Inline tags: `#tag`, `#nested/tag`

use regex::Regex;
use std::sync::LazyLock;
use trellis_core::{InlineTag, Wikilink};

static WIKILINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\]]+)\]\]").expect("wikilink regex"));

static INLINE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^|\s)#([A-Za-z][A-Za-z0-9_/-]*)").expect("inline tag regex")
});

static CODE_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^```[\s\S]*?^```|^    .*$|`[^`]+`").expect("code block regex")
});

/// Extract all wikilinks from body text, skipping code blocks
pub fn wikilinks(body: &str) -> Vec<Wikilink> {
    let mut links = Vec::new();
    for cap in WIKILINK_REGEX.captures_iter(body) {
        let full_match = cap.get(0).unwrap();
        let offset = full_match.start();

        if is_inside_code_block(body, offset) {
            continue;
        }

        let is_embed = !cap.get(1).unwrap().as_str().is_empty();
        let inner = cap.get(2).unwrap().as_str();
        links.push(Wikilink::parse(inner, offset, is_embed));
    }
    links
}

/// Extract all inline #tags from body text, skipping code blocks
///
/// A tag starts with a letter so markdown headings (`# Title`) never
/// register as tags.
pub fn inline_tags(body: &str) -> Vec<InlineTag> {
    let mut tags = Vec::new();
    for cap in INLINE_TAG_REGEX.captures_iter(body) {
        let name = cap.get(1).unwrap();
        // The `#` sits one byte before the captured name
        let offset = name.start() - 1;

        if is_inside_code_block(body, offset) {
            continue;
        }

        tags.push(InlineTag::new(name.as_str(), offset));
    }
    tags
}

/// Check if an offset is inside a code block or inline code span
fn is_inside_code_block(content: &str, offset: usize) -> bool {
    for m in CODE_BLOCK_REGEX.find_iter(content) {
        if offset >= m.start() && offset < m.end() {
            return true;
        }
    }
    false
}
