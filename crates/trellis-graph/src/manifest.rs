//! Corpus manifest generation
//!
//! The manifest is the JSON index a consuming application loads
//! instead of re-parsing the corpus: one entry per note with its id,
//! title, tags, source file, and outgoing links.

use serde::{Deserialize, Serialize};
use trellis_core::NoteRecord;

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    /// Source file path, forward slashes on every platform
    pub file: String,
    pub links: Vec<String>,
}

/// Corpus manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub notes: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest from parsed notes, keeping corpus order
    pub fn from_notes(notes: &[NoteRecord]) -> Self {
        let entries = notes
            .iter()
            .map(|note| ManifestEntry {
                id: note.id.clone(),
                title: note.title.clone(),
                tags: note.tags.clone(),
                file: note.source.to_string_lossy().replace('\\', "/"),
                links: note.links.clone(),
            })
            .collect();
        Self { notes: entries }
    }

    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
