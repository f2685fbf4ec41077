//! Page Text Store ingestion
//!
//! The OCR engine runs outside this system; what it leaves behind is a
//! directory of per-page text files. Ingestion materializes those into the
//! ordered Page Text Store.

use crate::StoreError;
use lading_domain::{Page, PageStore};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Build a [`PageStore`] from a directory of per-page OCR text files.
///
/// Files with a `.txt` extension are taken in sorted filename order
/// (`page_000.txt`, `page_001.txt`, ...) and assigned 0-based indices in
/// that order. A file that is not valid UTF-8 is decoded lossily; a page
/// with no readable text is still a page. Unreadable scans are a chunking
/// concern, not an ingestion error.
pub fn ingest_text_dir(dir: &Path) -> Result<PageStore, StoreError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        warn!("no .txt page files found in {}", dir.display());
    }

    let mut pages = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        pages.push(Page::new(index, text));
    }

    info!("ingested {} pages from {}", pages.len(), dir.display());
    Ok(PageStore::new(pages)?)
}
