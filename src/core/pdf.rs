//! PDF text-extraction capability.
//!
//! The builder never touches PDF bytes itself; it talks to a
//! [`DocumentReader`] that opens a document and exposes per-page
//! best-effort text. The production implementation is backed by the
//! `pdf-extract` crate; tests substitute an in-memory fake.
//!
//! Extraction is best-effort by contract: scanned or malformed pages
//! may yield empty or garbled text, and that must surface as an empty
//! page or a recoverable error, never a panic.

use std::path::Path;

use crate::core::error::{PulpError, Result};

/// An opened document exposing per-page text
pub trait PageText {
    /// Total number of pages, including pages with no extractable text
    fn page_count(&self) -> usize;

    /// Best-effort plain text of the page at `index` (0-based)
    fn page_text(&self, index: usize) -> Result<String>;
}

/// Capability to open page-oriented documents
pub trait DocumentReader {
    /// Open the document at `path`, or fail with a recoverable
    /// [`PulpError::DocumentOpen`].
    fn open(&self, path: &Path) -> Result<Box<dyn PageText>>;
}

/// Production reader backed by the `pdf-extract` crate.
///
/// Extraction happens once at open time: `pdf-extract` walks the full
/// document and returns one string per page, so per-page access after
/// that is a cheap lookup.
#[derive(Debug, Clone, Default)]
pub struct PdfTextReader;

impl PdfTextReader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for PdfTextReader {
    fn open(&self, path: &Path) -> Result<Box<dyn PageText>> {
        let pdf = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let pages =
            pdf_extract::extract_text_by_pages(path).map_err(|e| PulpError::DocumentOpen {
                pdf: pdf.clone(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(ExtractedPages { pdf, pages }))
    }
}

/// Pages pre-extracted by [`PdfTextReader`]
struct ExtractedPages {
    pdf: String,
    pages: Vec<String>,
}

impl PageText for ExtractedPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        match self.pages.get(index) {
            Some(text) => Ok(text.clone()),
            None => Err(PulpError::PageExtraction {
                pdf: self.pdf.clone(),
                page: index + 1,
                reason: format!("page index {index} out of range"),
            }),
        }
    }
}
