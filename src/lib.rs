//! pulp - PDF corpus indexer
//!
//! Converts a directory of PDF documents into a single searchable
//! JSON index: per-page text is extracted, normalized, and split into
//! bounded-size overlapping chunks tagged with their source document
//! and page number. The output feeds a downstream retrieval step
//! (lexical or embedding search) that needs small, context-preserving
//! text units with provenance.
//!
//! # Architecture
//!
//! - **core**: domain logic
//!   - normalize (whitespace/null cleanup of raw page text)
//!   - chunker (paragraph packing + overlapping hard-split fallback)
//!   - builder (document/page orchestration, index assembly, output)
//!   - pdf (text-extraction capability seam)
//!   - config, error, types
//!
//! - **cli**: clap adapter (depends on core)

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::builder::IndexBuilder;
pub use crate::core::chunker::Chunker;
pub use crate::core::config::Config;
pub use crate::core::error::{PulpError, Result};
pub use crate::core::normalize::normalize;
pub use crate::core::pdf::{DocumentReader, PageText, PdfTextReader};
pub use crate::core::types::*;
