//! Corpus assembly with per-document error isolation

use crate::builder::{BuildReport, GraphOptions, LinkGraphBuilder};
use std::path::{Path, PathBuf};
use trellis_core::{CorpusError, NoteParser, NoteRecord, ParseResult};

/// A parsed corpus: the notes that validated plus the documents that
/// did not
///
/// One malformed note never prevents parsing of the rest; failures are
/// collected with their source paths so the defects can be located and
/// fixed.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Successfully parsed notes, in load order
    pub notes: Vec<NoteRecord>,
    /// Documents that failed to parse
    pub failures: Vec<CorpusError>,
}

impl Corpus {
    /// Load every note document directly inside a directory
    ///
    /// Files are matched against the parser's recognized extensions
    /// and visited in sorted path order, so corpus order (and with it
    /// manifest order and duplicate-id resolution) is deterministic.
    pub async fn load_dir(dir: &Path, parser: &dyn NoteParser) -> ParseResult<Corpus> {
        let extensions = parser.capabilities().extensions;

        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| extensions.iter().any(|known| known.eq_ignore_ascii_case(e)))
                .unwrap_or(false);
            if matches {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(Self::from_paths(&paths, parser).await)
    }

    /// Parse an explicit list of files, isolating per-document errors
    pub async fn from_paths(paths: &[PathBuf], parser: &dyn NoteParser) -> Corpus {
        let mut corpus = Corpus::default();
        for path in paths {
            match parser.parse_file(path).await {
                Ok(note) => corpus.notes.push(note),
                Err(error) => {
                    tracing::warn!(source = %path.display(), %error, "skipping unparsable document");
                    corpus.failures.push(CorpusError {
                        source_path: path.clone(),
                        error,
                    });
                }
            }
        }
        corpus
    }

    /// Wrap already-parsed notes
    pub fn from_notes(notes: Vec<NoteRecord>) -> Corpus {
        Corpus {
            notes,
            failures: Vec::new(),
        }
    }

    /// Build the link graph over the parsed notes
    pub fn build_graph(&self, options: GraphOptions) -> BuildReport {
        LinkGraphBuilder::with_options(options).build(&self.notes)
    }

    /// Ids of the parsed notes, in load order
    pub fn ids(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Number of parsed notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether no note parsed
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Whether any document failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ParseError;
    use trellis_parser::TrellisParser;

    async fn write(dir: &Path, name: &str, contents: &str) {
        tokio::fs::write(dir.join(name), contents).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_dir_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.md", "---\nid: b\ntitle: B\n---\nProse.\n").await;
        write(dir.path(), "a.md", "---\nid: a\ntitle: A\n---\nProse.\n").await;
        write(dir.path(), "notes.txt", "not a note").await;

        let parser = TrellisParser::new();
        let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.ids(), vec!["a", "b"]);
        assert!(!corpus.has_failures());
    }

    #[tokio::test]
    async fn test_malformed_document_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.md", "---\nid: good\ntitle: Good\n---\nProse.\n").await;
        write(dir.path(), "broken.md", "---\ntitle: No Id\n---\nProse.\n").await;

        let parser = TrellisParser::new();
        let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();

        assert_eq!(corpus.ids(), vec!["good"]);
        assert_eq!(corpus.failures.len(), 1);
        assert!(corpus.failures[0]
            .source_path
            .to_string_lossy()
            .ends_with("broken.md"));
        assert!(matches!(
            corpus.failures[0].error,
            ParseError::Schema { .. }
        ));
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let parser = TrellisParser::new();
        let err = Corpus::load_dir(Path::new("/nonexistent/notes"), &parser)
            .await
            .unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
