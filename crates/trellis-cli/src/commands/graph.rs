use anyhow::Result;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use super::{resolve_path, OutputFormat};
use crate::config::CliConfig;
use crate::output;
use trellis_graph::{Corpus, GraphOptions};
use trellis_parser::TrellisParser;

/// Table-friendly node summary
#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Out")]
    outgoing: usize,
    #[tabled(rename = "In")]
    backlinks: usize,
}

/// Execute graph command
pub async fn execute(
    config: CliConfig,
    path: Option<PathBuf>,
    include_body_links: bool,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let path = resolve_path(&config, path);
    let parser = TrellisParser::new();
    let corpus = Corpus::load_dir(&path, &parser).await?;

    for failure in &corpus.failures {
        output::error(&failure.to_string());
    }

    let report = corpus.build_graph(GraphOptions {
        include_body_links,
        strict,
    });

    match format {
        OutputFormat::Table => {
            output::header("Link graph");
            let rows: Vec<NodeRow> = report
                .graph
                .nodes()
                .iter()
                .map(|id| NodeRow {
                    id: id.clone(),
                    outgoing: report.graph.outgoing(id).len(),
                    backlinks: report.graph.backlinks(id).len(),
                })
                .collect();
            if !rows.is_empty() {
                let table = Table::new(&rows).with(Style::modern()).to_string();
                println!("{table}");
            }

            for warning in &report.dangling {
                output::warn(&warning.to_string());
            }
            for id in &report.duplicate_ids {
                output::error(&format!("duplicate note id `{id}`"));
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "graph": &report.graph,
                "dangling": &report.dangling,
                "duplicate_ids": &report.duplicate_ids,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    output::success(&format!(
        "{} nodes, {} edges, {} dangling links",
        report.graph.node_count(),
        report.graph.edge_count(),
        report.dangling.len()
    ));

    if strict && !report.dangling.is_empty() {
        anyhow::bail!("{} dangling link(s) in strict mode", report.dangling.len());
    }

    Ok(())
}
