//! Configuration management for the pulp indexer.
//!
//! Loads configuration from a TOML file and environment variables,
//! with sensible defaults for all settings.

use crate::core::chunker::{DEFAULT_MAX_CHARS, DEFAULT_OVERLAP};
use crate::core::error::{PulpError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

/// Input/output path configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory scanned for PDF documents
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Where the JSON index is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk (not bytes!)
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Character overlap between consecutive hard-split windows
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

// Default value functions
fn default_input_dir() -> PathBuf {
    PathBuf::from("./pdfs")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./data/index.json")
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            overlap: default_overlap(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PulpError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File resolution order:
    /// 1. File named by the `PULP_CONFIG` env var
    /// 2. `./pulp.toml` if present
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PULP_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("pulp.toml").exists() {
            Self::from_file("pulp.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(input_dir) = env::var("PULP_INPUT_DIR") {
            self.paths.input_dir = PathBuf::from(input_dir);
        }
        if let Ok(output_path) = env::var("PULP_OUTPUT_PATH") {
            self.paths.output_path = PathBuf::from(output_path);
        }
        if let Ok(max_chars) = env::var("PULP_MAX_CHARS") {
            if let Ok(size) = max_chars.parse() {
                self.chunking.max_chars = size;
            }
        }
        if let Ok(overlap) = env::var("PULP_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.overlap = o;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chars == 0 {
            return Err(PulpError::ConfigError(
                "Max chunk size must be non-zero".to_string(),
            ));
        }

        // A non-positive hard-split advance would never terminate
        if self.chunking.overlap >= self.chunking.max_chars {
            return Err(PulpError::ConfigError(
                "Overlap must be less than max chunk size".to_string(),
            ));
        }

        Ok(())
    }

    /// Log resolved configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Input dir: {:?}", self.paths.input_dir);
        tracing::info!("  Output path: {:?}", self.paths.output_path);
        tracing::info!("  Max chunk size: {} chars", self.chunking.max_chars);
        tracing::info!("  Overlap: {} chars", self.chunking.overlap);
    }
}
