use anyhow::Result;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use super::{resolve_path, OutputFormat};
use crate::config::CliConfig;
use crate::output;
use trellis_graph::Corpus;
use trellis_parser::TrellisParser;

/// Table-friendly note summary
#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Links")]
    links: usize,
    #[tabled(rename = "Words")]
    words: usize,
}

/// Execute parse command
pub async fn execute(
    config: CliConfig,
    path: Option<PathBuf>,
    lenient: bool,
    format: OutputFormat,
) -> Result<()> {
    let path = resolve_path(&config, path);
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let parser = if lenient {
        TrellisParser::lenient()
    } else {
        TrellisParser::new()
    };

    output::info(&format!("Parsing: {}", path.display()));

    let corpus = if path.is_file() {
        Corpus::from_paths(&[path.clone()], &parser).await
    } else {
        Corpus::load_dir(&path, &parser).await?
    };

    match format {
        OutputFormat::Table => {
            for failure in &corpus.failures {
                output::error(&failure.to_string());
            }
            if !corpus.notes.is_empty() {
                let rows: Vec<NoteRow> = corpus
                    .notes
                    .iter()
                    .map(|note| NoteRow {
                        id: note.id.clone(),
                        title: note.title.clone(),
                        tags: note.tags.join(", "),
                        links: note.links.len(),
                        words: note.structure.word_count,
                    })
                    .collect();
                let table = Table::new(&rows).with(Style::modern()).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "notes": &corpus.notes,
                "failures": corpus.failures.iter().map(|f| {
                    serde_json::json!({
                        "file": f.source_path,
                        "error": f.error.to_string(),
                    })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    output::success(&format!(
        "Parsed {} notes, {} errors",
        corpus.len(),
        corpus.failures.len()
    ));

    Ok(())
}
