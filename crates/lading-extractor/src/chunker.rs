//! Page grouping into logical documents
//!
//! The scan keeps a current-chunk buffer and closes it whenever the
//! boundary predicate recognizes the start of a new document. The policy
//! baked in here, independent of the predicate:
//!
//! - the first page always opens chunk 0
//! - blank pages never open a chunk; an unreadable scan joins the
//!   document before it rather than becoming a degenerate chunk
//!
//! Chunking never fails. One chunk per page and one chunk for the whole
//! bundle are both legal outcomes; callers check the partition invariant
//! with [`verify_partition`](lading_domain::verify_partition) afterward.

use lading_domain::traits::BoundaryPredicate;
use lading_domain::{Chunk, Page, DEFAULT_BLANK_THRESHOLD};

/// Start-of-document heuristic keyed on header keywords.
///
/// Fires when one of the first few lines of a page's text begins with a
/// configured keyword. Scanned paperwork reliably puts the document title
/// at the head of a line in the header region; continuation prose that
/// merely mentions another document type ("as per the bill of lading
/// date") must not open a new document, so mid-line matches do not count.
#[derive(Debug, Clone)]
pub struct KeywordBoundary {
    keywords: Vec<String>,
    scan_lines: usize,
}

/// Header phrasings of the document types this pipeline handles
const DEFAULT_KEYWORDS: &[&str] = &[
    "INVOICE",
    "COMMERCIAL INVOICE",
    "TAX INVOICE",
    "BILL OF LADING",
    "CERTIFICATE",
];

/// How many leading lines count as the header region
const DEFAULT_SCAN_LINES: usize = 5;

impl KeywordBoundary {
    /// Create a boundary predicate with custom keywords (matched
    /// case-insensitively against the header region)
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_uppercase()).collect(),
            scan_lines: DEFAULT_SCAN_LINES,
        }
    }

    /// Widen or narrow the header region
    pub fn with_scan_lines(mut self, scan_lines: usize) -> Self {
        self.scan_lines = scan_lines;
        self
    }
}

impl Default for KeywordBoundary {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect())
    }
}

impl BoundaryPredicate for KeywordBoundary {
    fn is_boundary(&self, _previous: Option<&Page>, current: &Page) -> bool {
        current
            .text
            .lines()
            .take(self.scan_lines)
            .map(|line| line.trim().to_uppercase())
            .any(|line| {
                self.keywords
                    .iter()
                    .any(|keyword| line.starts_with(keyword.as_str()))
            })
    }
}

/// Group pages into chunks using the default blank threshold
pub fn chunk_pages(pages: &[Page], predicate: &dyn BoundaryPredicate) -> Vec<Chunk> {
    chunk_pages_with(pages, predicate, DEFAULT_BLANK_THRESHOLD)
}

/// Group pages into chunks, treating pages under `blank_threshold` trimmed
/// characters as unreadable
pub fn chunk_pages_with(
    pages: &[Page],
    predicate: &dyn BoundaryPredicate,
    blank_threshold: usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    if pages.is_empty() {
        return chunks;
    }

    let mut start = 0usize;
    for (position, page) in pages.iter().enumerate().skip(1) {
        let previous = &pages[position - 1];
        if !page.is_blank_at(blank_threshold) && predicate.is_boundary(Some(previous), page) {
            chunks.push(Chunk::new(chunks.len(), start, position - 1));
            start = position;
        }
    }
    chunks.push(Chunk::new(chunks.len(), start, pages.len() - 1));

    chunks
}
