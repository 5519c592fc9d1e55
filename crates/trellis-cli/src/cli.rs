use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "trellis - parse note corpora and build their link graphs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/trellis/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Set output format (table, json)
    #[arg(short = 'f', long, global = true, default_value = "table")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a note document or a directory of notes
    Parse {
        /// File or directory to parse (defaults to the configured notes dir)
        path: Option<PathBuf>,

        /// Use lenient validation (file-stem id fallback)
        #[arg(long)]
        lenient: bool,
    },

    /// Build the link graph of a note corpus
    Graph {
        /// Corpus directory (defaults to the configured notes dir)
        path: Option<PathBuf>,

        /// Fold body wikilinks into the edge set
        #[arg(long)]
        include_body_links: bool,

        /// Fail when any link is dangling
        #[arg(long)]
        strict: bool,
    },

    /// Generate the corpus manifest (config.json)
    Manifest {
        /// Corpus directory (defaults to the configured notes dir)
        path: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject documents the lenient fallbacks would repair
        #[arg(long)]
        strict: bool,
    },

    /// Validate a corpus: schema errors, dangling links, advisories
    Check {
        /// Corpus directory (defaults to the configured notes dir)
        path: Option<PathBuf>,

        /// Also fail on dangling links
        #[arg(long)]
        strict: bool,
    },
}
