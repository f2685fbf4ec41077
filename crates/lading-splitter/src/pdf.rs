//! PDF-backed paginated source
//!
//! Implements [`PageSource`] over lopdf. Range extraction works on a clone
//! of the loaded document: out-of-range pages are deleted and unreachable
//! objects pruned, which preserves the remaining pages' content and
//! formatting untouched.

use crate::SplitError;
use lading_domain::traits::PageSource;
use lopdf::Document;
use std::path::Path;

/// The original paginated bundle, loaded once and sliced per chunk
pub struct PdfSource {
    doc: Document,
    page_count: usize,
}

impl PdfSource {
    /// Load a PDF bundle from disk
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let doc = Document::load(path)
            .map_err(|e| SplitError::Pdf(format!("failed to load {}: {}", path.display(), e)))?;
        Ok(Self::from_document(doc))
    }

    /// Wrap an already-loaded document
    pub fn from_document(doc: Document) -> Self {
        let page_count = doc.get_pages().len();
        Self { doc, page_count }
    }
}

impl PageSource for PdfSource {
    type Error = SplitError;

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn extract_range(&self, start: usize, end: usize) -> Result<Vec<u8>, SplitError> {
        if start > end || end >= self.page_count {
            return Err(SplitError::RangeOutOfBounds {
                start,
                end,
                page_count: self.page_count,
            });
        }

        let mut sub = self.doc.clone();

        // lopdf numbers pages from 1.
        let delete: Vec<u32> = (1..=self.page_count as u32)
            .filter(|page| {
                let index = (*page as usize) - 1;
                index < start || index > end
            })
            .collect();
        if !delete.is_empty() {
            sub.delete_pages(&delete);
        }
        sub.prune_objects();
        sub.renumber_objects();

        let mut buf = Vec::new();
        sub.save_to(&mut buf)
            .map_err(|e| SplitError::Pdf(format!("failed to serialize page range: {}", e)))?;
        Ok(buf)
    }
}
