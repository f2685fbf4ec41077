//! Domain error type
//!
//! Expected pipeline failures (unparseable model output, failed model
//! calls, out-of-range splits) are data, not errors; the variants here
//! cover structurally impossible states that indicate a logic defect.

use thiserror::Error;

/// Errors raised for violated structural invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Page indices must be 0-based and contiguous
    #[error("page index {found} where {expected} was expected: page indices must be 0-based and contiguous")]
    NonContiguousPages {
        /// The index that was expected at this position
        expected: usize,
        /// The index that was found
        found: usize,
    },

    /// The chunker's output must partition the page index space
    #[error("chunk partition violated: {0}")]
    PartitionViolation(String),
}
