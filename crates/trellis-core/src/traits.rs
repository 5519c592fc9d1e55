//! Parser abstraction
//!
//! Core defines the canonical parser trait and its capability
//! descriptor; implementation crates depend on core, never the other
//! way around.

use crate::error::ParseResult;
use crate::note::NoteRecord;
use async_trait::async_trait;
use std::path::Path;

/// A parser that turns one document into a validated note record
///
/// `parse_source` is the pure, synchronous contract: same text in,
/// same record out. `parse_file` layers file IO and capability checks
/// (size limit, UTF-8) on top of it.
#[async_trait]
pub trait NoteParser: Send + Sync {
    /// Read and parse a document from disk
    async fn parse_file(&self, path: &Path) -> ParseResult<NoteRecord>;

    /// Parse document text already in memory
    ///
    /// `source` is recorded on the resulting note for diagnostics; it
    /// is not read from.
    fn parse_source(&self, text: &str, source: &Path) -> ParseResult<NoteRecord>;

    /// What this parser supports
    fn capabilities(&self) -> ParserCapabilities;
}

/// Capability descriptor for a parser implementation
#[derive(Debug, Clone)]
pub struct ParserCapabilities {
    /// Parser name
    pub name: &'static str,

    /// Parser version
    pub version: &'static str,

    /// Supports YAML frontmatter (---)
    pub yaml_frontmatter: bool,

    /// Supports TOML frontmatter (+++)
    pub toml_frontmatter: bool,

    /// Extracts [[wikilinks]] from the body
    pub wikilinks: bool,

    /// Extracts inline #tags from the body
    pub inline_tags: bool,

    /// Maximum file size in bytes (None = unlimited)
    pub max_file_size: Option<usize>,

    /// Recognized file extensions
    pub extensions: Vec<&'static str>,
}
