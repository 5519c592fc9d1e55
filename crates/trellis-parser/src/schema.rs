//! Metadata schema validation

use serde_json::Value;
use std::path::Path;
use trellis_core::{Frontmatter, ParseError, ParseResult};

/// Validated metadata fields of one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMeta {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub links: Vec<String>,
}

/// Validate a metadata block against the note schema
///
/// `id` and `title` are required non-empty strings; `tags` and
/// `links`, when present, must be sequences of non-empty strings.
/// Duplicate tags are dropped (first occurrence wins); duplicate
/// links are kept, their order is the author's.
pub fn validate(frontmatter: &Frontmatter) -> ParseResult<NoteMeta> {
    if !frontmatter.is_well_formed() {
        return Err(ParseError::format(
            "metadata block is not a key/value mapping",
        ));
    }

    let id = required_string(frontmatter, "id")?;
    let title = required_string(frontmatter, "title")?;
    let tags = dedup(string_sequence(frontmatter, "tags")?);
    let links = string_sequence(frontmatter, "links")?;

    Ok(NoteMeta {
        id,
        title,
        tags,
        links,
    })
}

/// Validate with the permissive fallbacks of the original corpus
/// generator: a missing id becomes the file stem, a missing title
/// becomes the id, and malformed sequences degrade to empty.
pub fn validate_lenient(frontmatter: Option<&Frontmatter>, source: &Path) -> NoteMeta {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let id = frontmatter
        .and_then(|fm| fm.get_string("id"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            tracing::debug!(source = %source.display(), "no usable `id`, falling back to file stem");
            stem
        });

    let title = frontmatter
        .and_then(|fm| fm.get_string("title"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| id.clone());

    let tags = dedup(lenient_sequence(frontmatter, "tags"));
    let links = lenient_sequence(frontmatter, "links");

    NoteMeta {
        id,
        title,
        tags,
        links,
    }
}

fn required_string(frontmatter: &Frontmatter, field: &str) -> ParseResult<String> {
    match frontmatter.get(field) {
        None | Some(Value::Null) => Err(ParseError::schema(field, "missing required field")),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(ParseError::schema(field, "must be a non-empty string"))
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(_) => Err(ParseError::schema(field, "expected a string")),
    }
}

fn string_sequence(frontmatter: &Frontmatter, field: &str) -> ParseResult<Vec<String>> {
    match frontmatter.get(field) {
        // Absent (or explicitly null) sequences are simply empty
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str().map(|s| s.trim()) {
                    Some(s) if !s.is_empty() => out.push(s.to_string()),
                    _ => {
                        return Err(ParseError::schema(
                            field,
                            "entries must be non-empty strings",
                        ))
                    }
                }
            }
            Ok(out)
        }
        Some(_) => Err(ParseError::schema(
            field,
            "expected a sequence of strings",
        )),
    }
}

fn lenient_sequence(frontmatter: Option<&Frontmatter>, field: &str) -> Vec<String> {
    frontmatter
        .and_then(|fm| fm.get_string_list(field))
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
