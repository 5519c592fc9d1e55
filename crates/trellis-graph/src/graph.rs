//! The link graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trellis_core::LinkOrigin;

/// One resolved edge in the link graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEdge {
    /// Source note id
    pub from: String,
    /// Target note id
    pub to: String,
    /// Where the reference was written
    pub origin: LinkOrigin,
}

/// Directed graph over note ids
///
/// Nodes are note ids, edges are resolved link references. Edge order
/// follows the author's `links` ordering and duplicates are kept, so
/// edge multiplicity is meaningful. Cycles are valid; two notes
/// linking to each other is the normal shape of a knowledge graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkGraph {
    nodes: Vec<String>,
    edges: Vec<LinkEdge>,
    outgoing: HashMap<String, Vec<String>>,
    incoming: HashMap<String, Vec<String>>,
}

impl LinkGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; ignored if already present
    pub(crate) fn add_node(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.outgoing.contains_key(&id) {
            self.outgoing.insert(id.clone(), Vec::new());
            self.incoming.insert(id.clone(), Vec::new());
            self.nodes.push(id);
        }
    }

    /// Add an edge between two existing nodes
    pub(crate) fn add_edge(&mut self, from: &str, to: &str, origin: LinkOrigin) {
        self.outgoing
            .get_mut(from)
            .expect("edge source is a node")
            .push(to.to_string());
        self.incoming
            .get_mut(to)
            .expect("edge target is a node")
            .push(from.to_string());
        self.edges.push(LinkEdge {
            from: from.to_string(),
            to: to.to_string(),
            origin,
        });
    }

    /// Whether an id is a node of the graph
    pub fn contains(&self, id: &str) -> bool {
        self.outgoing.contains_key(id)
    }

    /// Node ids in insertion (corpus) order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// All edges in resolution order
    pub fn edges(&self) -> &[LinkEdge] {
        &self.edges
    }

    /// Ids this note links to, in authored order (duplicates kept)
    pub fn outgoing(&self, id: &str) -> &[String] {
        self.outgoing.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Ids that link to this note
    pub fn backlinks(&self, id: &str) -> &[String] {
        self.incoming.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with no edges in either direction
    pub fn orphans(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|id| {
                self.outgoing(id).is_empty() && self.backlinks(id).is_empty()
            })
            .map(|id| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinkGraph {
        let mut graph = LinkGraph::new();
        graph.add_node("a");
        graph.add_node("b");
        graph.add_node("c");
        graph.add_edge("a", "b", LinkOrigin::Metadata { index: 0 });
        graph.add_edge("b", "a", LinkOrigin::Metadata { index: 0 });
        graph
    }

    #[test]
    fn test_adjacency() {
        let graph = sample();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.outgoing("a"), ["b".to_string()]);
        assert_eq!(graph.backlinks("a"), ["b".to_string()]);
        assert_eq!(graph.orphans(), vec!["c"]);
    }

    #[test]
    fn test_cycles_are_valid() {
        let graph = sample();
        // a -> b and b -> a coexist
        assert_eq!(graph.outgoing("a"), ["b".to_string()]);
        assert_eq!(graph.outgoing("b"), ["a".to_string()]);
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let mut graph = LinkGraph::new();
        graph.add_node("a");
        graph.add_node("b");
        graph.add_edge("a", "b", LinkOrigin::Metadata { index: 0 });
        graph.add_edge("a", "b", LinkOrigin::Metadata { index: 1 });

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.outgoing("a").len(), 2);
    }

    #[test]
    fn test_duplicate_nodes_ignored() {
        let mut graph = LinkGraph::new();
        graph.add_node("a");
        graph.add_node("a");
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_unknown_id_queries_are_empty() {
        let graph = sample();
        assert!(!graph.contains("zzz"));
        assert!(graph.outgoing("zzz").is_empty());
        assert!(graph.backlinks("zzz").is_empty());
    }
}
