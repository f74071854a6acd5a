//! Core data types for the pulp indexer.
//!
//! Defines the persisted index structure (chunks plus per-document
//! metadata) and the statistics returned by an indexing run. Field
//! names on the serialized types are part of the on-disk format and
//! must not change without bumping [`INDEX_FORMAT_VERSION`].

use serde::{Deserialize, Serialize};

/// Version of the serialized index format
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// A single text chunk extracted from one page of a PDF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Source document file name (not a full path)
    pub pdf: String,

    /// Page number within the document, 1-based
    pub page: usize,

    /// Chunk text content, never empty
    pub text: String,
}

/// Per-document metadata, one entry per successfully opened PDF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document file name
    pub pdf: String,

    /// Total page count, including pages that yielded no text
    pub pages: usize,
}

/// The persisted index artifact.
///
/// Chunk order is meaningful: sorted document order, then page order,
/// then in-page chunk order. Consumers rely on it to reconstruct
/// approximate document position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Format version, currently 1
    pub version: u32,

    /// Document metadata in sorted document order
    pub pdf_meta: Vec<DocumentMeta>,

    /// All chunks across all documents, in document/page/chunk order
    pub chunks: Vec<ChunkRecord>,
}

impl SearchIndex {
    /// Create an empty index at the current format version
    pub fn new() -> Self {
        Self {
            version: INDEX_FORMAT_VERSION,
            pdf_meta: Vec::new(),
            chunks: Vec::new(),
        }
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from an indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of documents successfully opened and indexed
    pub documents_indexed: usize,

    /// Number of documents skipped because they could not be opened
    pub documents_skipped: usize,

    /// Total chunks created
    pub chunks_created: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
