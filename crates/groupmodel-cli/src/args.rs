use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "groupmodel")]
#[command(about = "Render form configurations into presentation trees", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config file (defaults to $GROUPMODEL_CONFIG, then the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a context to every item of a form and print the resulting tree
    Render {
        /// Form configuration (JSON)
        #[arg(long)]
        form: PathBuf,

        /// Render context (JSON); an empty context when omitted
        #[arg(long)]
        context: Option<PathBuf>,

        /// Search-and-list configurations keyed by name (JSON)
        #[arg(long)]
        store: Option<PathBuf>,

        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective engine config
    Config,
}
