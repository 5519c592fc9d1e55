//! Parse error taxonomy and corpus-level diagnostics

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error produced while turning one document into a note record
///
/// A parse error is always scoped to a single document; callers that
/// process a corpus collect these per document and keep going.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The metadata block cannot be located or separated from the body
    #[error("Format error: {0}")]
    Format(String),

    /// A required field is missing or has the wrong shape
    #[error("Schema error in `{field}`: {reason}")]
    Schema {
        /// Metadata field (or `body`) that failed validation
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// File content is not valid UTF-8
    #[error("Invalid UTF-8 encoding in file")]
    Encoding,

    /// File exceeds the parser's size capability
    #[error("File too large: {size} bytes (max {max} bytes)")]
    FileTooLarge {
        /// Actual file size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },
}

/// Specialized Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a schema error for a named field
    pub fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable (the document is malformed
    /// but the process can move on to the next one)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Schema { .. })
    }

    /// Check if this error is fatal (environment-level failure)
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}

/// Where a link reference was written in its source note
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LinkOrigin {
    /// Entry in the metadata `links` sequence, by position
    Metadata {
        /// Zero-based index into the `links` sequence
        index: usize,
    },
    /// Wikilink in the body text, by byte offset
    Body {
        /// Byte offset of the wikilink in the body
        offset: usize,
    },
}

/// A link whose target id does not exist in the corpus
///
/// Data-quality warning, never a crash condition: the graph is built
/// without the edge and the warning is reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DanglingLink {
    /// Id of the note containing the reference
    pub source: String,
    /// The unresolvable target id
    pub target: String,
    /// Where in the source note the reference appears
    pub origin: LinkOrigin,
}

// `Display` is written by hand rather than via `#[derive(Error)]`/`#[error]`
// because thiserror reserves a field named `source` as the error's
// `std::error::Error::source()`, which a `String` cannot satisfy. The message
// is identical to the former `#[error(...)]` attribute.
impl std::fmt::Display for DanglingLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "dangling link from `{}` to `{}`",
            self.source, self.target
        )
    }
}

/// A document that failed to parse during corpus assembly
///
/// Wraps the per-document error with the path needed to locate and fix
/// the defect. One of these never aborts processing of other documents.
#[derive(Debug, Error)]
#[error("{}: {error}", .source_path.display())]
pub struct CorpusError {
    /// Path of the offending document
    pub source_path: PathBuf,
    /// What went wrong with it
    pub error: ParseError,
}
