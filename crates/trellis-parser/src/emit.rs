//! Canonical document emission
//!
//! Re-emits a note record as document text: fenced YAML metadata
//! (id, title, tags, links, in that order) followed by the body.
//! Emission is the normal form — parsing an emitted document yields
//! the record back.

use serde::Serialize;
use std::path::Path;
use trellis_core::{NoteRecord, ParseResult};

#[derive(Serialize)]
struct CanonicalMeta<'a> {
    id: &'a str,
    title: &'a str,
    tags: &'a [String],
    links: &'a [String],
}

/// Emit a note record as canonical document text
pub fn emit(note: &NoteRecord) -> String {
    let meta = CanonicalMeta {
        id: &note.id,
        title: &note.title,
        tags: &note.tags,
        links: &note.links,
    };
    // Plain strings and string sequences always serialize
    let yaml = serde_yaml::to_string(&meta).expect("canonical metadata serializes");

    let body = note.body.trim_end();
    if body.is_empty() {
        format!("---\n{yaml}---\n")
    } else {
        format!("---\n{yaml}---\n\n{body}\n")
    }
}

/// Normalize document text: parse it and re-emit the canonical form
pub fn normalize(text: &str, source: &Path) -> ParseResult<String> {
    use trellis_core::NoteParser as _;

    let parser = crate::parser::TrellisParser::new();
    let note = parser.parse_source(text, source)?;
    Ok(emit(&note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use trellis_core::NoteParser as _;

    #[test]
    fn test_emit_shape() {
        let parser = crate::parser::TrellisParser::new();
        let doc = "---\nid: a\ntitle: A\ntags: [x]\nlinks: [b]\n---\n\nBody prose.\n";
        let note = parser.parse_source(doc, &PathBuf::from("a.md")).unwrap();

        let emitted = emit(&note);
        assert!(emitted.starts_with("---\nid: a\ntitle: A\n"));
        assert!(emitted.contains("tags:\n- x\n"));
        assert!(emitted.contains("links:\n- b\n"));
        assert!(emitted.ends_with("Body prose.\n"));
    }

    #[test]
    fn test_round_trip_preserves_record_semantics() {
        let parser = crate::parser::TrellisParser::new();
        let source = PathBuf::from("a.md");
        let doc = "---\nid: a\ntitle: A\ntags: [y, x]\nlinks: [b, b]\n---\n\n# A\n\nSee [[b]].\n";

        let note = parser.parse_source(doc, &source).unwrap();
        let reparsed = parser.parse_source(&emit(&note), &source).unwrap();

        assert_eq!(reparsed.id, note.id);
        assert_eq!(reparsed.title, note.title);
        assert_eq!(reparsed.tags, note.tags);
        assert_eq!(reparsed.links, note.links);
        assert_eq!(reparsed.body, note.body);
        assert_eq!(reparsed.wikilinks, note.wikilinks);
        assert_eq!(reparsed.content_hash, note.content_hash);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let source = PathBuf::from("a.md");
        let doc = "---\ntitle: A\nid: a\nlinks:\n  - b\n---\nBody prose.\n";

        let once = normalize(doc, &source).unwrap();
        let twice = normalize(&once, &source).unwrap();
        assert_eq!(once, twice);
    }
}
