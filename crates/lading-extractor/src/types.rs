//! Summary types for extraction runs

use lading_domain::{ExtractedRecord, RecordStatus};

/// Counts over one extraction run, reported when the run finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Records produced (equals the chunk count)
    pub total: usize,

    /// Records with status ok
    pub ok: usize,

    /// Records whose model response was unparseable
    pub parse_failed: usize,

    /// Records whose model call failed
    pub model_error: usize,
}

impl ExtractionSummary {
    /// Tally a record collection
    pub fn from_records(records: &[ExtractedRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status {
                RecordStatus::Ok => summary.ok += 1,
                RecordStatus::ParseFailed => summary.parse_failed += 1,
                RecordStatus::ModelError => summary.model_error += 1,
            }
        }
        summary
    }

    /// Total failed records, either kind
    pub fn failed(&self) -> usize {
        self.parse_failed + self.model_error
    }
}
