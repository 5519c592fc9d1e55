//! Link-graph construction over parsed note corpora
//!
//! Builds the directed graph induced by note `links` fields, reports
//! dangling links as warnings, assembles corpora with per-document
//! error isolation, and generates the JSON manifest consumed by
//! downstream applications.

pub mod builder;
pub mod corpus;
pub mod graph;
pub mod manifest;

pub use builder::{build_graph, BuildReport, GraphError, GraphOptions, LinkGraphBuilder};
pub use corpus::Corpus;
pub use graph::{LinkEdge, LinkGraph};
pub use manifest::{Manifest, ManifestEntry};

pub use trellis_core::{CorpusError, DanglingLink, LinkOrigin};
