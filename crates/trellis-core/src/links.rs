//! Body-level references: wikilinks and inline tags

use serde::{Deserialize, Serialize};

/// Wikilink reference [[target|alias]]
///
/// Represents a body-text link to another note. Supports the simple
/// [[target]] form, aliases [[target|alias]], heading and block
/// references [[target#heading]] / [[target#^block]], and embeds
/// ![[target]].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wikilink {
    /// Target note id (without .md extension)
    pub target: String,

    /// Optional display alias
    pub alias: Option<String>,

    /// Byte offset in the body text
    pub offset: usize,

    /// Whether this is an embed (![[note]])
    pub is_embed: bool,

    /// Block reference (#^block-id)
    pub block_ref: Option<String>,

    /// Heading reference (#heading)
    pub heading_ref: Option<String>,
}

impl Wikilink {
    /// Create a simple wikilink
    pub fn new(target: impl Into<String>, offset: usize) -> Self {
        Self {
            target: target.into(),
            alias: None,
            offset,
            is_embed: false,
            block_ref: None,
            heading_ref: None,
        }
    }

    /// Get the display text (alias or target)
    pub fn display(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }

    /// Parse a wikilink from raw inner text (e.g., "Note#heading|Alias")
    pub fn parse(text: &str, offset: usize, is_embed: bool) -> Self {
        let (target_part, alias) = if let Some((t, a)) = text.split_once('|') {
            (t, Some(a.to_string()))
        } else {
            (text, None)
        };

        let (target, heading_ref, block_ref) =
            if let Some((t, ref_part)) = target_part.split_once('#') {
                if let Some(block) = ref_part.strip_prefix('^') {
                    (t.to_string(), None, Some(block.to_string()))
                } else {
                    (t.to_string(), Some(ref_part.to_string()), None)
                }
            } else {
                (target_part.to_string(), None, None)
            };

        Self {
            target,
            alias,
            offset,
            is_embed,
            block_ref,
            heading_ref,
        }
    }
}

/// Inline tag reference #tag or #nested/tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineTag {
    /// Full tag name (without #)
    pub name: String,

    /// Tag path components (for nested tags)
    pub path: Vec<String>,

    /// Byte offset in the body text
    pub offset: usize,
}

impl InlineTag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, offset: usize) -> Self {
        let name = name.into();
        let path = name.split('/').map(|s| s.to_string()).collect();
        Self { name, path, offset }
    }

    /// Get the root tag (first component)
    pub fn root(&self) -> &str {
        self.path.first().map(|s| s.as_str()).unwrap_or(&self.name)
    }

    /// Get the leaf tag (last component)
    pub fn leaf(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or(&self.name)
    }

    /// Check if this tag is nested
    pub fn is_nested(&self) -> bool {
        self.path.len() > 1
    }
}
