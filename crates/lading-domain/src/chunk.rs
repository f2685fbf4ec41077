//! Chunk module - contiguous page runs forming logical documents

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A contiguous, inclusive page range judged to be one logical document.
///
/// Chunks are created by the chunker and immutable afterward. Ids are
/// sequence numbers starting at 0 and match the chunk's position in the
/// chunk list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Sequence number starting at 0
    pub id: usize,

    /// First page index (inclusive)
    pub start: usize,

    /// Last page index (inclusive)
    pub end: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(id: usize, start: usize, end: usize) -> Self {
        Self { id, start, end }
    }

    /// Number of pages in this chunk
    pub fn page_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the given page index falls inside this chunk
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Check that `chunks` exactly partitions `0..page_count`.
///
/// Violations indicate a logic defect in the chunker and are the one fatal
/// condition in the pipeline; callers should abort the stage with the
/// returned diagnostic.
pub fn verify_partition(chunks: &[Chunk], page_count: usize) -> Result<(), DomainError> {
    if page_count == 0 {
        if chunks.is_empty() {
            return Ok(());
        }
        return Err(DomainError::PartitionViolation(format!(
            "{} chunks produced for an empty bundle",
            chunks.len()
        )));
    }

    if chunks.is_empty() {
        return Err(DomainError::PartitionViolation(format!(
            "no chunks produced for a {page_count}-page bundle"
        )));
    }

    let mut expected_start = 0usize;
    for (position, chunk) in chunks.iter().enumerate() {
        if chunk.id != position {
            return Err(DomainError::PartitionViolation(format!(
                "chunk at position {position} has id {}",
                chunk.id
            )));
        }
        if chunk.start > chunk.end {
            return Err(DomainError::PartitionViolation(format!(
                "chunk {} has inverted range {}..={}",
                chunk.id, chunk.start, chunk.end
            )));
        }
        if chunk.start != expected_start {
            return Err(DomainError::PartitionViolation(format!(
                "chunk {} starts at page {} where {} was expected",
                chunk.id, chunk.start, expected_start
            )));
        }
        expected_start = chunk.end + 1;
    }

    if expected_start != page_count {
        return Err(DomainError::PartitionViolation(format!(
            "chunks cover pages 0..{} but the bundle has {} pages",
            expected_start, page_count
        )));
    }

    Ok(())
}
