use anyhow::Result;
use std::path::PathBuf;

use super::resolve_path;
use crate::config::CliConfig;
use crate::output;
use trellis_graph::{Corpus, GraphOptions};
use trellis_parser::TrellisParser;

/// Execute check command
///
/// Validates the corpus: schema and format errors fail the check,
/// dangling links fail only with --strict, and title/heading
/// mismatches are advisories.
pub async fn execute(config: CliConfig, path: Option<PathBuf>, strict: bool) -> Result<()> {
    let path = resolve_path(&config, path);
    let parser = TrellisParser::new();
    let corpus = Corpus::load_dir(&path, &parser).await?;

    for failure in &corpus.failures {
        output::error(&failure.to_string());
    }

    let report = corpus.build_graph(GraphOptions::default());
    for warning in &report.dangling {
        output::warn(&warning.to_string());
    }
    for id in &report.duplicate_ids {
        output::error(&format!("duplicate note id `{id}`"));
    }

    let mut advisories = 0;
    for note in &corpus.notes {
        if !note.heading_matches_title() {
            advisories += 1;
            output::info(&format!(
                "{}: first heading does not match title `{}`",
                note.source.display(),
                note.title
            ));
        }
    }

    let errors = corpus.failures.len() + report.duplicate_ids.len();
    output::info(&format!(
        "{} notes, {} errors, {} dangling links, {} advisories",
        corpus.len(),
        errors,
        report.dangling.len(),
        advisories
    ));

    if errors > 0 {
        anyhow::bail!("corpus check failed with {errors} error(s)");
    }
    if strict && !report.dangling.is_empty() {
        anyhow::bail!(
            "corpus check failed with {} dangling link(s) in strict mode",
            report.dangling.len()
        );
    }

    output::success("Corpus is clean");
    Ok(())
}
