//! CLI adapter for pulp
//!
//! Thin clap layer over `core/`: parses arguments, loads
//! configuration, dispatches to command modules. All domain logic
//! lives in `core/`.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// pulp - PDF corpus indexer
///
/// Extracts per-page text from a directory of PDFs, splits it into
/// bounded overlapping chunks, and writes a single JSON index with
/// per-chunk provenance for downstream retrieval.
#[derive(Parser, Debug)]
#[command(name = "pulp")]
#[command(version)]
#[command(about = "Build a chunked JSON search index from PDF documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index the configured PDF directory into a JSON chunk index
    #[command(name = "build-index")]
    BuildIndex(commands::BuildArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  pulp completions bash > ~/.local/share/bash-completion/completions/pulp
    ///   zsh:   pulp completions zsh > ~/.zfunc/_pulp
    ///   fish:  pulp completions fish > ~/.config/fish/completions/pulp.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::BuildIndex(args) => commands::build::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
