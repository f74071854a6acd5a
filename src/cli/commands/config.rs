//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub input_dir: String,
    pub output_path: String,
    pub max_chars: usize,
    pub overlap: usize,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        input_dir: config.paths.input_dir.to_string_lossy().into_owned(),
        output_path: config.paths.output_path.to_string_lossy().into_owned(),
        max_chars: config.chunking.max_chars,
        overlap: config.chunking.overlap,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  input_dir: {}", response.input_dir);
            println!("  output_path: {}", response.output_path);
            println!("  max_chars: {}", response.max_chars);
            println!("  overlap: {}", response.overlap);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
