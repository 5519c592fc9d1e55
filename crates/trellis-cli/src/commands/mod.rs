pub mod check;
pub mod graph;
pub mod manifest;
pub mod parse;

use crate::config::CliConfig;
use std::path::PathBuf;

/// Output formats shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<String> for OutputFormat {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Resolve the corpus path: explicit argument wins, config dir otherwise
pub fn resolve_path(config: &CliConfig, path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| config.notes.dir.clone())
}
