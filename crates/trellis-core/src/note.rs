//! The validated note record

use crate::frontmatter::Frontmatter;
use crate::links::{InlineTag, Wikilink};
use crate::structure::NoteStructure;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A fully parsed and validated note
///
/// The id is the stable link target other notes refer to; the corpus
/// enforces its uniqueness, not the record itself. `links` keeps the
/// author's ordering and any duplicates, `tags` is de-duplicated at
/// parse time and compares as an unordered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Unique identifier within the corpus; link target
    pub id: String,

    /// Human-readable title, any language or script
    pub title: String,

    /// Free-form taxonomy labels
    pub tags: Vec<String>,

    /// Ordered references to other note ids
    pub links: Vec<String>,

    /// Body text (markup kept verbatim)
    pub body: String,

    /// Source path of the document
    pub source: PathBuf,

    /// Raw metadata block the record was built from
    pub frontmatter: Option<Frontmatter>,

    /// Structural facts about the body
    pub structure: NoteStructure,

    /// Wikilinks found in the body
    pub wikilinks: Vec<Wikilink>,

    /// Inline #tags found in the body
    pub inline_tags: Vec<InlineTag>,

    /// Hash of the source document (for change detection)
    pub content_hash: String,
}

impl NoteRecord {
    /// Tags as an unordered set
    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.tags.iter().map(|t| t.as_str()).collect()
    }

    /// Compare tag sets ignoring order
    pub fn same_tags(&self, other: &NoteRecord) -> bool {
        self.tag_set() == other.tag_set()
    }

    /// Metadata tags combined with inline body tags, de-duplicated
    pub fn all_tags(&self) -> Vec<String> {
        let mut all = self.tags.clone();
        for tag in &self.inline_tags {
            if !all.iter().any(|t| t == &tag.name) {
                all.push(tag.name.clone());
            }
        }
        all
    }

    /// Whether the body's first top-level heading matches the title
    ///
    /// The match is a corpus convention, so a mismatch is advisory
    /// rather than a validation failure.
    pub fn heading_matches_title(&self) -> bool {
        match self.structure.first_h1() {
            Some(h1) => h1.trim() == self.title.trim(),
            None => false,
        }
    }

    /// Link targets referenced from the body, in order of appearance
    pub fn body_link_targets(&self) -> Vec<&str> {
        self.wikilinks.iter().map(|w| w.target.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tags: &[&str]) -> NoteRecord {
        NoteRecord {
            id: "neural-networks".to_string(),
            title: "Neural Networks".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            links: vec!["ai-general".to_string()],
            body: "# Neural Networks\n\nProse.".to_string(),
            source: PathBuf::from("notes/neural-networks.md"),
            frontmatter: None,
            structure: NoteStructure::new(),
            wikilinks: Vec::new(),
            inline_tags: Vec::new(),
            content_hash: String::new(),
        }
    }

    #[test]
    fn test_tag_set_ignores_order() {
        let a = record(&["IA", "Deep Learning"]);
        let b = record(&["Deep Learning", "IA"]);
        assert!(a.same_tags(&b));
        assert_ne!(a.tags, b.tags);
    }

    #[test]
    fn test_all_tags_merges_inline() {
        let mut note = record(&["IA"]);
        note.inline_tags.push(InlineTag::new("rust", 5));
        note.inline_tags.push(InlineTag::new("IA", 12));

        let all = note.all_tags();
        assert_eq!(all, vec!["IA".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_heading_matches_title() {
        let mut note = record(&[]);
        assert!(!note.heading_matches_title());

        note.structure
            .headings
            .push(crate::structure::Heading::new(1, "Neural Networks", 0));
        assert!(note.heading_matches_title());

        note.title = "Something Else".to_string();
        assert!(!note.heading_matches_title());
    }
}
