//! Build command - build the chunked index from a directory of PDFs

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::builder::IndexBuilder;
use crate::core::config::Config;
use crate::core::pdf::PdfTextReader;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory of PDF documents (overrides config)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output path for the JSON index (overrides config)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Maximum characters per chunk (overrides config)
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Hard-split overlap in characters (overrides config)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub documents_indexed: usize,
    pub documents_skipped: usize,
    pub chunks_created: usize,
    pub duration_secs: f64,
    pub output_path: String,
}

/// Execute the build command
pub fn execute(
    args: BuildArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config.clone();
    if let Some(input) = args.input {
        config.paths.input_dir = input;
    }
    if let Some(output) = args.output {
        config.paths.output_path = output;
    }
    if let Some(max_chars) = args.max_chars {
        config.chunking.max_chars = max_chars;
    }
    if let Some(overlap) = args.overlap {
        config.chunking.overlap = overlap;
    }

    // Re-validate after CLI overrides; catches overlap >= max_chars
    config.validate()?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing PDFs in {}...",
            colors::file_path(&config.paths.input_dir.display().to_string())
        );
    }

    let builder = IndexBuilder::new(&config, PdfTextReader::new())?;
    let stats = builder.run()?;

    let response = BuildResponse {
        documents_indexed: stats.documents_indexed,
        documents_skipped: stats.documents_skipped,
        chunks_created: stats.chunks_created,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        output_path: config.paths.output_path.to_string_lossy().into_owned(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} documents ({} chunks) in {}",
                colors::success("Indexed"),
                colors::number(&response.documents_indexed.to_string()),
                colors::number(&response.chunks_created.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            if response.documents_skipped > 0 {
                println!(
                    "{} {} unreadable documents",
                    colors::warning("Skipped"),
                    colors::number(&response.documents_skipped.to_string())
                );
            }
            println!("Wrote {}", colors::file_path(&response.output_path));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
