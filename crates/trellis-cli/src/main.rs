use anyhow::Result;
use clap::Parser;

use trellis_cli::{
    cli::{Cli, Commands, LogLevel},
    commands, config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        match cli.log_level {
            Some(LogLevel::Off) | None => "off",
            Some(LogLevel::Error) => "error",
            Some(LogLevel::Warn) => "warn",
            Some(LogLevel::Info) => "info",
            Some(LogLevel::Debug) => "debug",
            Some(LogLevel::Trace) => "trace",
        }
    };
    if log_level != "off" {
        let env_filter = format!(
            "trellis_cli={0},trellis_core={0},trellis_parser={0},trellis_graph={0}",
            log_level
        );
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
            .init();
    }

    let config = config::CliConfig::load(cli.config)?;
    tracing::debug!(notes_dir = %config.notes.dir.display(), "configuration loaded");

    let format = commands::OutputFormat::from(cli.format);

    match cli.command {
        Commands::Parse { path, lenient } => {
            commands::parse::execute(config, path, lenient, format).await?
        }

        Commands::Graph {
            path,
            include_body_links,
            strict,
        } => commands::graph::execute(config, path, include_body_links, strict, format).await?,

        Commands::Manifest {
            path,
            output,
            strict,
        } => commands::manifest::execute(config, path, output, strict).await?,

        Commands::Check { path, strict } => commands::check::execute(config, path, strict).await?,
    }

    Ok(())
}
