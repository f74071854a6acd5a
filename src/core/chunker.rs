//! Paragraph-aware text chunking with a hard-split fallback.
//!
//! Packs whole paragraphs into chunks up to a maximum size, measured
//! in **characters** rather than bytes so chunk boundaries always fall
//! on valid UTF-8 character boundaries. A paragraph that is itself
//! larger than the maximum is hard-split into fixed-size windows that
//! overlap by a configurable number of characters, so a concept
//! spanning a forced split point appears in both neighbouring chunks.
//!
//! Overlap is only introduced inside hard-split paragraphs; ordinary
//! paragraph-packed chunks never share content.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{PulpError, Result};

/// Paragraph separator: a line break, optional whitespace, another
/// line break. One or more blank lines act as one boundary.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Default maximum chunk size in characters
pub const DEFAULT_MAX_CHARS: usize = 1100;
/// Default hard-split overlap in characters
pub const DEFAULT_OVERLAP: usize = 120;

/// Paragraph-packing chunker.
///
/// All sizes are measured in characters, not bytes.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Maximum characters per chunk
    max_chars: usize,

    /// Characters shared between consecutive hard-split windows
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// Rejects `max_chars == 0` and `overlap >= max_chars`: with
    /// `overlap >= max_chars` the hard-split window advance would be
    /// non-positive and the split would never terminate.
    pub fn new(max_chars: usize, overlap: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(PulpError::ConfigError(
                "Max chunk size must be non-zero".to_string(),
            ));
        }
        if overlap >= max_chars {
            return Err(PulpError::ConfigError(format!(
                "Overlap ({overlap}) must be less than max chunk size ({max_chars})"
            )));
        }

        Ok(Self { max_chars, overlap })
    }

    /// Get the maximum chunk size in characters.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Get the hard-split overlap in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split text into an ordered sequence of chunks.
    ///
    /// Paragraphs (blank-line separated) are greedily packed into a
    /// buffer, joined by a blank line, while the buffer stays within
    /// `max_chars`. A paragraph that alone exceeds `max_chars` is
    /// hard-split into overlapping windows. Text without any blank
    /// line is one giant paragraph and goes straight to the
    /// hard-split path once it exceeds the maximum.
    ///
    /// Every returned chunk is non-empty; concatenating the chunks
    /// (ignoring hard-split overlap) reproduces the paragraph content
    /// in order.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let paragraphs: Vec<&str> = PARAGRAPH_BREAK
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let mut chunks = Vec::new();
        let mut buf = String::new();
        let mut buf_chars = 0usize;

        for para in paragraphs {
            let para_chars = para.chars().count();

            // The +2 accounts for the blank-line separator, counted
            // even when the buffer is still empty.
            if buf_chars + para_chars + 2 <= self.max_chars {
                if !buf.is_empty() {
                    buf.push_str("\n\n");
                    buf_chars += 2;
                }
                buf.push_str(para);
                buf_chars += para_chars;
                continue;
            }

            if !buf.is_empty() {
                chunks.push(std::mem::take(&mut buf));
                buf_chars = 0;
            }

            if para_chars > self.max_chars {
                self.hard_split(para, &mut chunks);
            } else {
                buf.push_str(para);
                buf_chars = para_chars;
            }
        }

        if !buf.is_empty() {
            chunks.push(buf);
        }

        chunks
    }

    /// Slice an oversized paragraph into fixed-size character windows.
    ///
    /// Windows are `max_chars` long (the final one may be shorter)
    /// and consecutive windows share `overlap` characters. Works on
    /// `char_indices` so window boundaries never split a multi-byte
    /// character.
    fn hard_split(&self, para: &str, chunks: &mut Vec<String>) {
        let char_indices: Vec<(usize, char)> = para.char_indices().collect();
        let total = char_indices.len();

        // Positive by construction: new() rejects overlap >= max_chars
        let step = self.max_chars - self.overlap;

        let mut start = 0;
        while start < total {
            let end = (start + self.max_chars).min(total);

            let byte_start = char_indices[start].0;
            let byte_end = if end < total {
                char_indices[end].0
            } else {
                para.len()
            };

            chunks.push(para[byte_start..byte_end].to_string());
            start += step;
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        // Defaults satisfy new()'s bounds
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap: DEFAULT_OVERLAP,
        }
    }
}
