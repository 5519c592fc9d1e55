//! Canonical types for the Trellis note toolkit
//!
//! This crate is the single source of truth for note data types, the
//! parser trait, and the error taxonomy. Implementation crates
//! (trellis-parser, trellis-graph) depend on core; core depends on
//! nothing of theirs.

pub mod error;
pub mod frontmatter;
pub mod links;
pub mod note;
pub mod structure;
pub mod traits;

pub use error::{CorpusError, DanglingLink, LinkOrigin, ParseError, ParseResult};
pub use frontmatter::{Frontmatter, FrontmatterFormat};
pub use links::{InlineTag, Wikilink};
pub use note::NoteRecord;
pub use structure::{Heading, NoteStructure};
pub use traits::{NoteParser, ParserCapabilities};
