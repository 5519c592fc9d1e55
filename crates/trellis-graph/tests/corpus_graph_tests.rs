//! End-to-end corpus tests: directory of documents in, graph and
//! manifest out.

use std::path::Path;
use trellis_graph::{Corpus, GraphOptions, Manifest};
use trellis_parser::TrellisParser;

async fn write(dir: &Path, name: &str, contents: &str) {
    tokio::fs::write(dir.join(name), contents).await.unwrap();
}

fn doc(id: &str, links: &[&str]) -> String {
    let links_yaml = if links.is_empty() {
        String::new()
    } else {
        format!("links: [{}]\n", links.join(", "))
    };
    format!("---\nid: {id}\ntitle: {id}\n{links_yaml}---\n\n# {id}\n\nProse about {id}.\n")
}

#[tokio::test]
async fn test_clean_corpus_graph() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", &doc("a", &["b", "c"])).await;
    write(dir.path(), "b.md", &doc("b", &["a"])).await;
    write(dir.path(), "c.md", &doc("c", &[])).await;

    let parser = TrellisParser::new();
    let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();
    let report = corpus.build_graph(GraphOptions::default());

    // N notes with zero dangling links: exactly N nodes, one edge per
    // links entry
    assert_eq!(report.graph.node_count(), 3);
    assert_eq!(report.graph.edge_count(), 3);
    assert!(report.dangling.is_empty());
    assert!(report.duplicate_ids.is_empty());
}

#[tokio::test]
async fn test_dangling_link_example() {
    // ai-general and deep-learning exist, machine-learning does not:
    // two resolved edges, one warning naming machine-learning
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "neural-networks.md",
        &doc("neural-networks", &["ai-general", "machine-learning", "deep-learning"]),
    )
    .await;
    write(dir.path(), "ai-general.md", &doc("ai-general", &[])).await;
    write(dir.path(), "deep-learning.md", &doc("deep-learning", &[])).await;

    let parser = TrellisParser::new();
    let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();
    let report = corpus.build_graph(GraphOptions::default());

    assert_eq!(report.graph.outgoing("neural-networks").len(), 2);
    assert_eq!(report.dangling.len(), 1);
    assert_eq!(report.dangling[0].target, "machine-learning");
}

#[tokio::test]
async fn test_broken_note_does_not_block_graph() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", &doc("a", &["b"])).await;
    write(dir.path(), "b.md", &doc("b", &[])).await;
    write(dir.path(), "broken.md", "---\nid: broken\n").await;

    let parser = TrellisParser::new();
    let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.failures.len(), 1);

    let report = corpus.build_graph(GraphOptions::default());
    assert_eq!(report.graph.node_count(), 2);
    assert_eq!(report.graph.edge_count(), 1);
}

#[tokio::test]
async fn test_manifest_matches_corpus_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.md", &doc("beta", &[])).await;
    write(dir.path(), "a.md", &doc("alpha", &["beta"])).await;

    let parser = TrellisParser::new();
    let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();
    let manifest = Manifest::from_notes(&corpus.notes);

    // Sorted path order: a.md before b.md
    assert_eq!(manifest.notes[0].id, "alpha");
    assert_eq!(manifest.notes[1].id, "beta");
    assert!(manifest.notes[0].file.ends_with("a.md"));
    assert_eq!(manifest.notes[0].links, vec!["beta"]);
}

#[tokio::test]
async fn test_lenient_corpus_mirrors_original_generator() {
    // Documents without ids take their file stem, exactly like the
    // legacy config generator
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "machine-learning.md", "# Machine Learning\n\nProse.\n").await;
    write(dir.path(), "ai-general.md", &doc("ai-general", &["machine-learning"])).await;

    let parser = TrellisParser::lenient();
    let corpus = Corpus::load_dir(dir.path(), &parser).await.unwrap();

    assert_eq!(corpus.ids(), vec!["ai-general", "machine-learning"]);

    let report = corpus.build_graph(GraphOptions::default());
    assert!(report.dangling.is_empty());
    assert_eq!(report.graph.backlinks("machine-learning"), ["ai-general".to_string()]);
}
