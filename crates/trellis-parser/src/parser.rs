//! NoteParser implementation

use crate::{body, emit, extract, fences, schema};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::Path;
use trellis_core::{NoteParser, NoteRecord, ParseError, ParseResult, ParserCapabilities};

/// Validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Full schema validation; malformed documents are rejected
    #[default]
    Strict,
    /// Corpus-generator compatibility: missing ids fall back to the
    /// file stem, malformed sequences degrade to empty
    Lenient,
}

/// The default note parser
///
/// Splits the metadata fence, validates the schema, and extracts body
/// structure, wikilinks, and inline tags.
pub struct TrellisParser {
    capabilities: ParserCapabilities,
    mode: ParseMode,
}

impl TrellisParser {
    /// Create a strict parser
    pub fn new() -> Self {
        Self::with_mode(ParseMode::Strict)
    }

    /// Create a lenient parser
    pub fn lenient() -> Self {
        Self::with_mode(ParseMode::Lenient)
    }

    /// Create a parser with an explicit validation mode
    pub fn with_mode(mode: ParseMode) -> Self {
        Self {
            capabilities: ParserCapabilities {
                name: "TrellisParser",
                version: env!("CARGO_PKG_VERSION"),
                yaml_frontmatter: true,
                toml_frontmatter: true,
                wikilinks: true,
                inline_tags: true,
                max_file_size: Some(10 * 1024 * 1024), // 10 MiB
                extensions: vec!["md", "markdown"],
            },
            mode,
        }
    }

    /// The active validation mode
    pub fn mode(&self) -> ParseMode {
        self.mode
    }
}

impl Default for TrellisParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteParser for TrellisParser {
    async fn parse_file(&self, path: &Path) -> ParseResult<NoteRecord> {
        let bytes = tokio::fs::read(path).await?;

        if let Some(max) = self.capabilities.max_file_size {
            if bytes.len() > max {
                return Err(ParseError::FileTooLarge {
                    size: bytes.len(),
                    max,
                });
            }
        }

        let text = String::from_utf8(bytes).map_err(|_| ParseError::Encoding)?;
        self.parse_source(&text, path)
    }

    fn parse_source(&self, text: &str, source: &Path) -> ParseResult<NoteRecord> {
        let (frontmatter, raw_body, meta) = match self.mode {
            ParseMode::Strict => {
                let (fm, raw_body) = fences::split(text)?;
                let meta = schema::validate(&fm)?;
                if raw_body.trim().is_empty() {
                    return Err(ParseError::schema(
                        "body",
                        "must be non-empty after trimming whitespace",
                    ));
                }
                (Some(fm), raw_body, meta)
            }
            ParseMode::Lenient => {
                let (fm, raw_body) = fences::split_lenient(text)?;
                let meta = schema::validate_lenient(fm.as_ref(), source);
                (fm, raw_body, meta)
            }
        };

        let body_text = raw_body.trim().to_string();
        let structure = body::parse_structure(&body_text);
        let wikilinks = extract::wikilinks(&body_text);
        let inline_tags = extract::inline_tags(&body_text);

        let mut record = NoteRecord {
            id: meta.id,
            title: meta.title,
            tags: meta.tags,
            links: meta.links,
            body: body_text,
            source: source.to_path_buf(),
            frontmatter,
            structure,
            wikilinks,
            inline_tags,
            content_hash: String::new(),
        };
        record.content_hash = content_hash(&record);

        tracing::debug!(
            id = %record.id,
            source = %source.display(),
            links = record.links.len(),
            "parsed note"
        );

        Ok(record)
    }

    fn capabilities(&self) -> ParserCapabilities {
        self.capabilities.clone()
    }
}

/// Hash of the canonical form, stable under metadata reordering and
/// whitespace normalization
fn content_hash(record: &NoteRecord) -> String {
    let mut hasher = Sha256::new();
    hasher.update(emit::emit(record).as_bytes());
    hex::encode(hasher.finalize())
}
