//! Index building orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Enumerate PDF documents in the input directory (sorted)
//! 2. Extract per-page text via the reader capability
//! 3. Normalize and chunk each page
//! 4. Accumulate chunk records with provenance
//! 5. Serialize the index to the output path
//!
//! Processing is strictly sequential: one document at a time, one
//! page at a time. Chunk order in the output is sorted document
//! order, then page order, then in-page chunk order, and consumers
//! depend on it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::chunker::Chunker;
use crate::core::config::Config;
use crate::core::error::{PulpError, Result};
use crate::core::normalize::normalize;
use crate::core::pdf::DocumentReader;
use crate::core::types::{BuildStats, ChunkRecord, DocumentMeta, SearchIndex};

/// Orchestrates the indexing run
pub struct IndexBuilder<R: DocumentReader> {
    input_dir: PathBuf,
    output_path: PathBuf,
    chunker: Chunker,
    reader: R,
}

impl<R: DocumentReader> IndexBuilder<R> {
    /// Create a builder from configuration and a reader capability.
    ///
    /// Fails with a config error if the chunking parameters are
    /// degenerate (`overlap >= max_chars`).
    pub fn new(config: &Config, reader: R) -> Result<Self> {
        let chunker = Chunker::new(config.chunking.max_chars, config.chunking.overlap)?;

        Ok(Self {
            input_dir: config.paths.input_dir.clone(),
            output_path: config.paths.output_path.clone(),
            chunker,
            reader,
        })
    }

    /// Build the index in memory.
    ///
    /// Fails only on the run-fatal conditions (missing input
    /// directory, no PDFs found). A document that cannot be opened is
    /// skipped with a warning; a page that cannot be extracted is
    /// treated as empty. Neither aborts the run.
    pub fn build(&self) -> Result<(SearchIndex, BuildStats)> {
        let start = Instant::now();

        let documents = self.collect_documents()?;
        tracing::info!("Found {} PDF documents to index", documents.len());

        let mut index = SearchIndex::new();
        let mut documents_indexed = 0;
        let mut documents_skipped = 0;

        for path in &documents {
            let pdf = file_name_of(path);
            tracing::info!("Indexing: {}", pdf);

            let doc = match self.reader.open(path) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", pdf, e);
                    documents_skipped += 1;
                    continue;
                }
            };

            let pages = doc.page_count();
            index.pdf_meta.push(DocumentMeta {
                pdf: pdf.clone(),
                pages,
            });
            documents_indexed += 1;

            for page_idx in 0..pages {
                // Extraction failure on a single page degrades to an
                // empty page rather than aborting the document.
                let raw = match doc.page_text(page_idx) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("Page {} of {} unreadable: {}", page_idx + 1, pdf, e);
                        String::new()
                    }
                };

                let text = normalize(&raw);
                if text.is_empty() {
                    continue;
                }

                for chunk in self.chunker.chunk_text(&text) {
                    index.chunks.push(ChunkRecord {
                        pdf: pdf.clone(),
                        page: page_idx + 1,
                        text: chunk,
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} documents indexed, {} skipped, {} chunks created in {}ms",
            documents_indexed,
            documents_skipped,
            index.chunks.len(),
            duration_ms
        );

        let stats = BuildStats {
            documents_indexed,
            documents_skipped,
            chunks_created: index.chunks.len(),
            duration_ms,
        };

        Ok((index, stats))
    }

    /// Build the index and write it to the configured output path.
    ///
    /// The output file is only touched after a fully successful
    /// build; a fatal error leaves no partial or stale-overwritten
    /// file behind.
    pub fn run(&self) -> Result<BuildStats> {
        let (index, stats) = self.build()?;
        self.write(&index)?;
        Ok(stats)
    }

    /// Serialize the index to the output path, creating parent
    /// directories and fully replacing any existing file.
    pub fn write(&self, index: &SearchIndex) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(index)?;
        fs::write(&self.output_path, json)?;

        tracing::info!("Wrote index to {:?}", self.output_path);
        Ok(())
    }

    /// Get the configured output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Enumerate `*.pdf` files directly inside the input directory,
    /// sorted by file name for deterministic output.
    fn collect_documents(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(PulpError::InputDirMissing(self.input_dir.clone()));
        }

        let mut documents: Vec<PathBuf> = fs::read_dir(&self.input_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_pdf(path))
            .collect();

        if documents.is_empty() {
            return Err(PulpError::NoDocumentsFound(self.input_dir.clone()));
        }

        documents.sort_by_key(|path| file_name_of(path));
        Ok(documents)
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
