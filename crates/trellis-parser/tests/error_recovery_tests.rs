//! Error recovery tests
//!
//! Malformed documents must fail with a classified error, never a
//! panic, and never a partial record.

use std::path::PathBuf;
use trellis_parser::{NoteParser, ParseError, TrellisParser};

fn parse(document: &str) -> Result<trellis_parser::NoteRecord, ParseError> {
    TrellisParser::new().parse_source(document, &PathBuf::from("test.md"))
}

#[test]
fn test_missing_metadata_block() {
    let err = parse("# Just a heading\n\nProse.\n").unwrap_err();
    assert!(matches!(err, ParseError::Format(_)));
}

#[test]
fn test_unterminated_metadata_block() {
    let document = "---\nid: a\ntitle: A\n\n# The fence above is never closed\n";
    let err = parse(document).unwrap_err();
    assert!(matches!(err, ParseError::Format(_)));
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn test_missing_id_produces_no_record() {
    let document = "---\ntitle: Orphan\n---\n\nBody.\n";
    let err = parse(document).unwrap_err();
    assert!(matches!(err, ParseError::Schema { ref field, .. } if field == "id"));
}

#[test]
fn test_broken_yaml_in_metadata() {
    let document = "---\ntitle: Test\ninvalid yaml: [unclosed\n---\n\n# Content\n";
    let err = parse(document).unwrap_err();
    assert!(matches!(err, ParseError::Format(_)));
}

#[test]
fn test_empty_document() {
    let err = parse("").unwrap_err();
    assert!(matches!(err, ParseError::Format(_)));
}

#[test]
fn test_whitespace_only_body() {
    let document = "---\nid: a\ntitle: A\n---\n   \n\t\n";
    let err = parse(document).unwrap_err();
    assert!(matches!(err, ParseError::Schema { ref field, .. } if field == "body"));
}

#[test]
fn test_errors_are_recoverable_per_document() {
    for document in [
        "no fence at all",
        "---\nid: a\n",
        "---\ntitle: only\n---\nBody.\n",
    ] {
        let err = parse(document).unwrap_err();
        assert!(
            err.is_recoverable(),
            "expected a recoverable per-document error for {document:?}, got {err}"
        );
    }
}

#[test]
fn test_unclosed_code_block_in_body() {
    let document = "---\nid: a\ntitle: A\n---\n\n# A\n\n```rust\nfn main() {\n";
    // Malformed markdown in the body is not a parse failure
    let note = parse(document).unwrap();
    assert_eq!(note.structure.headings.len(), 1);
}

#[test]
fn test_very_long_body() {
    let long = "a ".repeat(100_000);
    let document = format!("---\nid: a\ntitle: A\n---\n\n{long}\n");
    let note = parse(&document).unwrap();
    assert_eq!(note.structure.word_count, 100_000);
    assert!(note.structure.plain_text.len() <= 1003 + 3);
}

#[tokio::test]
async fn test_file_too_large() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.md");
    // 10 MiB limit plus a little
    let body = "x".repeat(10 * 1024 * 1024 + 1);
    tokio::fs::write(&path, body).await.unwrap();

    let err = TrellisParser::new().parse_file(&path).await.unwrap_err();
    assert!(matches!(err, ParseError::FileTooLarge { .. }));
    assert!(err.is_fatal());
}
