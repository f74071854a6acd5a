//! Normalization of raw extracted page text.
//!
//! PDF text extraction produces stray null bytes, runs of spaces from
//! justified layouts, and long stretches of blank lines between page
//! elements. [`normalize`] collapses those while keeping line breaks
//! intact, so paragraph boundaries survive for the chunker.

use once_cell::sync::Lazy;
use regex::Regex;

static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Clean raw extracted text.
///
/// - Null characters become a single space.
/// - Runs of spaces/tabs collapse to one space; line breaks are left
///   alone.
/// - Three or more consecutive newlines collapse to exactly two (one
///   blank line).
/// - The result is trimmed.
///
/// Pure and idempotent: `normalize(normalize(s)) == normalize(s)`.
/// Never fails; the worst case is an empty string.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('\0', " ");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}
