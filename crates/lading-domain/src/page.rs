//! Page module - per-page OCR text

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Threshold below which a page's trimmed OCR text counts as blank.
///
/// Scanner separator sheets and failed scans rarely OCR to more than a few
/// stray characters.
pub const DEFAULT_BLANK_THRESHOLD: usize = 50;

/// One page of the bundle: its ordinal position and raw OCR text.
///
/// Pages are immutable once produced. The text may be empty or garbled;
/// that is handled by the chunker's merge policy, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based position within the bundle
    pub index: usize,

    /// Raw OCR output for this page
    pub text: String,
}

impl Page {
    /// Create a new page
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Whether this page reads as blank at the default threshold
    pub fn is_blank(&self) -> bool {
        self.is_blank_at(DEFAULT_BLANK_THRESHOLD)
    }

    /// Whether this page reads as blank at a specific threshold
    pub fn is_blank_at(&self, threshold: usize) -> bool {
        self.text.trim().len() < threshold
    }
}

/// The Page Text Store: the full ordered sequence of pages for one bundle.
///
/// Construction validates that indices are 0-based and contiguous, so every
/// downstream consumer can treat a page's position and its `index` field as
/// interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStore {
    pages: Vec<Page>,
}

impl PageStore {
    /// Build a store from pages, validating the contiguous-index invariant
    pub fn new(pages: Vec<Page>) -> Result<Self, DomainError> {
        for (position, page) in pages.iter().enumerate() {
            if page.index != position {
                return Err(DomainError::NonContiguousPages {
                    expected: position,
                    found: page.index,
                });
            }
        }
        Ok(Self { pages })
    }

    /// Number of pages in the bundle
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the bundle has no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a page by index
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// All pages in index order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        let blank = Page::new(0, "   \n ");
        assert!(blank.is_blank());

        let garbled = Page::new(1, "~#");
        assert!(garbled.is_blank());

        let text = "COMMERCIAL INVOICE\nInvoice No. 4711\nSeller: Brent Trading Ltd.";
        let real = Page::new(2, text);
        assert!(!real.is_blank());
    }

    #[test]
    fn test_blank_threshold_is_configurable() {
        let page = Page::new(0, "short");
        assert!(page.is_blank_at(10));
        assert!(!page.is_blank_at(3));
    }

    #[test]
    fn test_store_accepts_contiguous_pages() {
        let store = PageStore::new(vec![
            Page::new(0, "first"),
            Page::new(1, "second"),
            Page::new(2, "third"),
        ])
        .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1).unwrap().text, "second");
    }

    #[test]
    fn test_store_rejects_gap() {
        let result = PageStore::new(vec![Page::new(0, "a"), Page::new(2, "b")]);
        assert_eq!(
            result.unwrap_err(),
            DomainError::NonContiguousPages {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_store_rejects_nonzero_start() {
        let result = PageStore::new(vec![Page::new(1, "a")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_store() {
        let store = PageStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }
}
