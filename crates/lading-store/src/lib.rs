//! Lading Store
//!
//! Flat-file persistence for the pipeline's intermediate state. Every stage
//! reads its input artifact and writes its output artifact under one
//! working directory, so the pipeline can be resumed at any stage and every
//! artifact stays human-inspectable:
//!
//! ```text
//! <workdir>/
//!   pages.json          ordered per-page OCR text (Page Text Store)
//!   chunks.json         ordered chunk boundaries {id, start, end}
//!   records.json        ordered extraction records, one per chunk
//!   failed_chunks.log   append-only log of failed extraction attempts
//!   split/              one output file per chunk
//! ```

#![warn(missing_docs)]

mod ingest;
mod workdir;

pub use ingest::ingest_text_dir;
pub use workdir::{Workdir, WorkdirStatus};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact (de)serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A loaded artifact violated a structural invariant
    #[error(transparent)]
    Domain(#[from] lading_domain::DomainError),

    /// An expected artifact does not exist yet
    #[error("{} not found (run the earlier pipeline stages first)", .0.display())]
    MissingArtifact(PathBuf),
}
