//! Error types for extraction
//!
//! These never escape a pipeline run: every failure is folded into the
//! chunk's record status. They exist so the fold point has something
//! precise to log and map.

use thiserror::Error;

/// Errors that can occur while extracting one chunk
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The model call failed (unreachable, non-success, join error)
    #[error("model error: {0}")]
    Model(String),

    /// The model call exceeded the configured timeout
    #[error("model call timed out after {0}s")]
    Timeout(u64),

    /// The model's response was not the expected structured shape
    #[error("invalid response format: {0}")]
    InvalidFormat(String),
}
