//! Link-graph construction

use crate::graph::LinkGraph;
use thiserror::Error;
use trellis_core::{DanglingLink, LinkOrigin, NoteRecord};

/// Graph construction options
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Fold body wikilinks into the edge set
    ///
    /// Off by default: metadata `links` are the corpus contract, body
    /// wikilinks are advisory.
    pub include_body_links: bool,

    /// Treat dangling links as errors instead of warnings
    pub strict: bool,
}

/// Errors from strict graph construction
#[derive(Debug, Error)]
pub enum GraphError {
    /// Strict mode found unresolvable links
    #[error("{} dangling link(s), first: {}", .0.len(), .0[0])]
    Dangling(Vec<DanglingLink>),
}

/// Outcome of a graph build
///
/// The graph is always fully constructed; dangling links and duplicate
/// ids are reported alongside it, never in place of it.
#[derive(Debug)]
pub struct BuildReport {
    /// The constructed graph
    pub graph: LinkGraph,
    /// Links whose target id does not exist in the corpus
    pub dangling: Vec<DanglingLink>,
    /// Ids that appeared on more than one note (first occurrence won)
    pub duplicate_ids: Vec<String>,
}

impl BuildReport {
    /// Apply strict policy: fail if anything dangled
    pub fn strict(self) -> Result<LinkGraph, GraphError> {
        if self.dangling.is_empty() {
            Ok(self.graph)
        } else {
            Err(GraphError::Dangling(self.dangling))
        }
    }
}

/// Builds a [`LinkGraph`] from parsed notes
#[derive(Debug, Default)]
pub struct LinkGraphBuilder {
    options: GraphOptions,
}

impl LinkGraphBuilder {
    /// Builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with explicit options
    pub fn with_options(options: GraphOptions) -> Self {
        Self { options }
    }

    /// Build the graph over a set of already-validated notes
    ///
    /// Every note id becomes a node; every `links` entry whose target
    /// exists becomes an edge. Unresolved entries are omitted from the
    /// graph and collected as warnings with enough context to locate
    /// the defect.
    pub fn build(&self, notes: &[NoteRecord]) -> BuildReport {
        let mut graph = LinkGraph::new();
        let mut duplicate_ids = Vec::new();

        for note in notes {
            if graph.contains(&note.id) {
                tracing::warn!(id = %note.id, source = %note.source.display(), "duplicate note id, keeping first occurrence");
                duplicate_ids.push(note.id.clone());
            } else {
                graph.add_node(note.id.clone());
            }
        }

        let mut dangling = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for note in notes {
            // Only the winning occurrence of an id contributes edges
            if !seen.insert(note.id.as_str()) {
                continue;
            }

            for (index, target) in note.links.iter().enumerate() {
                self.link(&mut graph, &mut dangling, note, target, LinkOrigin::Metadata { index });
            }

            if self.options.include_body_links {
                for wikilink in &note.wikilinks {
                    self.link(
                        &mut graph,
                        &mut dangling,
                        note,
                        &wikilink.target,
                        LinkOrigin::Body {
                            offset: wikilink.offset,
                        },
                    );
                }
            }
        }

        BuildReport {
            graph,
            dangling,
            duplicate_ids,
        }
    }

    fn link(
        &self,
        graph: &mut LinkGraph,
        dangling: &mut Vec<DanglingLink>,
        note: &NoteRecord,
        target: &str,
        origin: LinkOrigin,
    ) {
        if graph.contains(target) {
            graph.add_edge(&note.id, target, origin);
        } else {
            tracing::warn!(
                source = %note.id,
                target = %target,
                "dangling link, edge omitted"
            );
            dangling.push(DanglingLink {
                source: note.id.clone(),
                target: target.to_string(),
                origin,
            });
        }
    }
}

/// Build a graph with default options
///
/// Convenience for the common call shape: the graph plus its
/// dangling-link warnings.
pub fn build_graph(notes: &[NoteRecord]) -> (LinkGraph, Vec<DanglingLink>) {
    let report = LinkGraphBuilder::new().build(notes);
    (report.graph, report.dangling)
}
