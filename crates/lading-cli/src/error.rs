//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] lading_store::StoreError),

    /// Split error
    #[error("Split error: {0}")]
    Split(#[from] lading_splitter::SplitError),

    /// Structural invariant violated (logic defect, aborts the stage)
    #[error(transparent)]
    Domain(#[from] lading_domain::DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
