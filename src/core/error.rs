//! Error types and error handling for the pulp indexer.
//!
//! Only two error kinds are fatal to an indexing run: a missing input
//! directory and an input directory with no PDFs in it. Per-document
//! and per-page failures are handled locally by the builder (skip and
//! continue) and never abort the batch.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pulp operations
pub type Result<T> = std::result::Result<T, PulpError>;

/// Main error type for the pulp indexer
#[derive(Error, Debug)]
pub enum PulpError {
    #[error("Input directory not found: {0}")]
    InputDirMissing(PathBuf),

    #[error("No PDF documents found in: {0}")]
    NoDocumentsFound(PathBuf),

    #[error("Cannot open document '{pdf}': {reason}")]
    DocumentOpen { pdf: String, reason: String },

    #[error("Cannot extract text from '{pdf}' page {page}: {reason}")]
    PageExtraction {
        pdf: String,
        page: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PulpError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Fatal errors stop the run; everything else is recovered
    /// locally by the builder.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PulpError::DocumentOpen { .. } | PulpError::PageExtraction { .. }
        )
    }

    /// Check if this error means the input was missing or empty
    pub fn is_no_input(&self) -> bool {
        matches!(
            self,
            PulpError::InputDirMissing(_) | PulpError::NoDocumentsFound(_)
        )
    }
}
