use anyhow::{Context, Result};
use std::path::PathBuf;

use super::resolve_path;
use crate::config::CliConfig;
use crate::output;
use trellis_graph::{Corpus, Manifest};
use trellis_parser::TrellisParser;

/// Execute manifest command
///
/// Lenient parsing is the default so corpora written for the legacy
/// generator (documents without explicit ids) keep producing the same
/// manifest.
pub async fn execute(
    config: CliConfig,
    path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let path = resolve_path(&config, path);
    let parser = if strict {
        TrellisParser::new()
    } else {
        TrellisParser::lenient()
    };

    let corpus = Corpus::load_dir(&path, &parser).await?;
    for failure in &corpus.failures {
        output::error(&failure.to_string());
    }

    let manifest = Manifest::from_notes(&corpus.notes);
    let json = manifest.to_json_pretty()?;

    match output_path {
        Some(out) => {
            std::fs::write(&out, json.as_bytes())
                .with_context(|| format!("failed to write manifest to {}", out.display()))?;
            output::success(&format!(
                "Manifest written to {} with {} notes",
                out.display(),
                manifest.len()
            ));
        }
        None => {
            println!("{json}");
            output::success(&format!("Manifest generated with {} notes", manifest.len()));
        }
    }

    Ok(())
}
