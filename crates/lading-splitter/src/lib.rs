//! Lading Splitter
//!
//! Splits the original paginated bundle into one output file per chunk.
//! Splitting only needs the chunk boundaries; extraction records are
//! consulted for naming and an extraction failure never blocks file
//! production.
//!
//! Output files are named `{label}_{sequence}.pdf`, where `label` is the
//! record's document type when extraction succeeded and `unclassified`
//! otherwise, and `sequence` counts per label starting at 1 in chunk-id
//! order.

#![warn(missing_docs)]

pub mod pdf;

pub use pdf::PdfSource;

use lading_domain::traits::PageSource;
use lading_domain::{Chunk, ExtractedRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Label used when a chunk has no usable extraction record
const UNCLASSIFIED_LABEL: &str = "unclassified";

/// Errors raised by splitting operations
#[derive(Debug, Error)]
pub enum SplitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested page range does not exist in the source
    #[error("page range {start}..={end} out of bounds for {page_count}-page source")]
    RangeOutOfBounds {
        /// First requested page index
        start: usize,
        /// Last requested page index
        end: usize,
        /// Pages actually in the source
        page_count: usize,
    },

    /// Underlying PDF library error
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// A chunk whose output file could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChunk {
    /// The chunk that was skipped
    pub chunk_id: usize,
    /// Why it was skipped
    pub reason: String,
}

/// Outcome of a splitting run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Files written, in chunk-id order
    pub written: Vec<PathBuf>,
    /// Chunks whose files were skipped
    pub skipped: Vec<SkippedChunk>,
}

/// Write one output file per chunk into `out_dir`.
///
/// Every failure past directory creation is per-chunk: an out-of-bounds
/// range, a source error, or a write error skips that chunk's file and the
/// run continues. Ranges are checked against the source before extraction
/// even though the chunker invariant already rules violations out.
pub fn split_chunks<S>(
    source: &S,
    chunks: &[Chunk],
    records: &[ExtractedRecord],
    out_dir: &Path,
) -> Result<SplitReport, SplitError>
where
    S: PageSource,
    S::Error: std::fmt::Display,
{
    fs::create_dir_all(out_dir)?;

    let mut sequences: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut report = SplitReport::default();

    for chunk in chunks {
        let record = records.iter().find(|r| r.chunk_id == chunk.id);
        let label = match record {
            Some(r) if r.is_ok() => r.document_type.as_str(),
            _ => UNCLASSIFIED_LABEL,
        };

        let sequence = sequences
            .entry(label)
            .and_modify(|s| *s += 1)
            .or_insert(1);
        let path = out_dir.join(format!("{}_{}.pdf", label, sequence));

        if chunk.start > chunk.end || chunk.end >= source.page_count() {
            let reason = SplitError::RangeOutOfBounds {
                start: chunk.start,
                end: chunk.end,
                page_count: source.page_count(),
            }
            .to_string();
            warn!("skipping chunk {}: {}", chunk.id, reason);
            report.skipped.push(SkippedChunk {
                chunk_id: chunk.id,
                reason,
            });
            continue;
        }

        let bytes = match source.extract_range(chunk.start, chunk.end) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("skipping chunk {}: {}", chunk.id, e);
                report.skipped.push(SkippedChunk {
                    chunk_id: chunk.id,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match fs::write(&path, bytes) {
            Ok(()) => {
                info!(
                    "wrote {} (pages {}..={})",
                    path.display(),
                    chunk.start,
                    chunk.end
                );
                report.written.push(path);
            }
            Err(e) => {
                warn!("skipping chunk {}: write failed: {}", chunk.id, e);
                report.skipped.push(SkippedChunk {
                    chunk_id: chunk.id,
                    reason: format!("write failed: {}", e),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lading_domain::DocumentType;
    use std::collections::BTreeMap as Fields;

    /// In-memory source standing in for a real paginated file
    struct FakeSource {
        pages: usize,
    }

    impl PageSource for FakeSource {
        type Error = SplitError;

        fn page_count(&self) -> usize {
            self.pages
        }

        fn extract_range(&self, start: usize, end: usize) -> Result<Vec<u8>, SplitError> {
            if start > end || end >= self.pages {
                return Err(SplitError::RangeOutOfBounds {
                    start,
                    end,
                    page_count: self.pages,
                });
            }
            Ok(format!("pages {start}..={end}").into_bytes())
        }
    }

    fn ok_record(chunk_id: usize, document_type: DocumentType) -> ExtractedRecord {
        ExtractedRecord::ok(chunk_id, document_type, Fields::new())
    }

    #[test]
    fn test_one_file_per_chunk_with_type_labels() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FakeSource { pages: 5 };
        let chunks = vec![Chunk::new(0, 0, 1), Chunk::new(1, 2, 2), Chunk::new(2, 3, 4)];
        let records = vec![
            ok_record(0, DocumentType::Invoice),
            ok_record(1, DocumentType::Certificate),
            ok_record(2, DocumentType::Invoice),
        ];

        let report = split_chunks(&source, &chunks, &records, tmp.path()).unwrap();

        assert!(report.skipped.is_empty());
        let names: Vec<String> = report
            .written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["invoice_1.pdf", "certificate_1.pdf", "invoice_2.pdf"]);

        let body = fs::read_to_string(tmp.path().join("invoice_2.pdf")).unwrap();
        assert_eq!(body, "pages 3..=4");
    }

    #[test]
    fn test_failed_records_fall_back_to_unclassified() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FakeSource { pages: 3 };
        let chunks = vec![Chunk::new(0, 0, 1), Chunk::new(1, 2, 2)];
        let records = vec![
            ok_record(0, DocumentType::Invoice),
            ExtractedRecord::model_error(1),
        ];

        let report = split_chunks(&source, &chunks, &records, tmp.path()).unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(tmp.path().join("invoice_1.pdf").exists());
        assert!(tmp.path().join("unclassified_1.pdf").exists());
        assert_eq!(
            fs::read_to_string(tmp.path().join("unclassified_1.pdf")).unwrap(),
            "pages 2..=2"
        );
    }

    #[test]
    fn test_splitting_without_any_records() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FakeSource { pages: 2 };
        let chunks = vec![Chunk::new(0, 0, 0), Chunk::new(1, 1, 1)];

        let report = split_chunks(&source, &chunks, &[], tmp.path()).unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(tmp.path().join("unclassified_1.pdf").exists());
        assert!(tmp.path().join("unclassified_2.pdf").exists());
    }

    #[test]
    fn test_out_of_bounds_chunk_is_skipped_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FakeSource { pages: 3 };
        // Middle chunk requests pages 5..=10 of a 3-page source.
        let chunks = vec![Chunk::new(0, 0, 2), Chunk::new(1, 5, 10)];
        let records = vec![ok_record(0, DocumentType::BillOfLading)];

        let report = split_chunks(&source, &chunks, &records, tmp.path()).unwrap();

        assert_eq!(report.written.len(), 1);
        assert!(tmp.path().join("bill_of_lading_1.pdf").exists());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].chunk_id, 1);
        assert!(report.skipped[0].reason.contains("out of bounds"));
    }

    #[test]
    fn test_ok_unknown_record_is_labelled_unknown() {
        // A well-formed response outside the fixed type set still names
        // its file after the classification, not the fallback label.
        let tmp = tempfile::tempdir().unwrap();
        let source = FakeSource { pages: 1 };
        let chunks = vec![Chunk::new(0, 0, 0)];
        let records = vec![ok_record(0, DocumentType::Unknown)];

        let report = split_chunks(&source, &chunks, &records, tmp.path()).unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(tmp.path().join("unknown_1.pdf").exists());
    }
}
