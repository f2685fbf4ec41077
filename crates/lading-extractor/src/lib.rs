//! Lading Extractor
//!
//! The core pipeline crate: groups a bundle's pages into logical documents
//! and pulls structured fields out of each one via a language model.
//!
//! # Architecture
//!
//! ```text
//! Pages → Chunker → Chunks → PromptBuilder → LanguageModel → Parser → ExtractedRecords
//! ```
//!
//! # Key Properties
//!
//! - **Partition contract**: the chunker's output always partitions the
//!   page index space; no chunk is empty
//! - **Pluggable boundaries**: start-of-document detection is a
//!   [`BoundaryPredicate`](lading_domain::traits::BoundaryPredicate)
//!   implementation, not baked into the scan
//! - **One record per chunk**: extraction failures become records with an
//!   explicit status; nothing is retried and nothing vanishes
//!
//! # Example Usage
//!
//! ```no_run
//! use lading_extractor::{chunk_pages, ExtractorConfig, FieldExtractor, KeywordBoundary};
//! use lading_domain::Page;
//! use lading_llm::MockModel;
//!
//! # async fn example() {
//! let pages = vec![
//!     Page::new(0, "INVOICE #123 Total: $500"),
//!     Page::new(1, "terms and conditions, continued"),
//! ];
//!
//! let chunks = chunk_pages(&pages, &KeywordBoundary::default());
//!
//! let model = MockModel::new(r#"{"document_type": "Invoice", "invoice_number": "123"}"#);
//! let extractor = FieldExtractor::new(model, ExtractorConfig::default());
//! let records = extractor.extract_all(&pages, &chunks).await;
//! assert_eq!(records.len(), chunks.len());
//! # }
//! ```

#![warn(missing_docs)]

mod chunker;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use chunker::{chunk_pages, chunk_pages_with, KeywordBoundary};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::FieldExtractor;
pub use types::ExtractionSummary;
