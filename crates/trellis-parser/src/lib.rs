//! Trellis note parser
//!
//! Turns documents (fenced metadata block + markdown body) into
//! validated [`NoteRecord`]s:
//! - YAML (`---`) and TOML (`+++`) metadata fences
//! - schema validation with per-field diagnostics
//! - body structure extraction (headings, paragraph/word counts)
//! - Obsidian-compatible wikilink and inline-tag extraction
//! - canonical re-emission for normalization and hashing
//!
//! [`NoteRecord`]: trellis_core::NoteRecord

pub mod body;
pub mod emit;
pub mod extract;
pub mod fences;
pub mod parser;
pub mod schema;

pub use emit::{emit, normalize};
pub use parser::{ParseMode, TrellisParser};
pub use schema::NoteMeta;

// Re-export the core surface implementation users need alongside the parser
pub use trellis_core::{
    Frontmatter, FrontmatterFormat, NoteParser, NoteRecord, ParseError, ParseResult,
    ParserCapabilities,
};
