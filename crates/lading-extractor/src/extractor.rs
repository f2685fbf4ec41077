//! Core Field Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_model_response;
use crate::prompt::PromptBuilder;
use crate::types::ExtractionSummary;
use lading_domain::traits::LanguageModel;
use lading_domain::{Chunk, ExtractedRecord, Page};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Classifies chunks and extracts their fields via a language model.
///
/// Makes exactly one model call per chunk. Every failure mode is folded
/// into the chunk's record status; a run over N chunks always produces N
/// records, in chunk-id order.
pub struct FieldExtractor<M: LanguageModel> {
    model: Arc<M>,
    config: ExtractorConfig,
}

impl<M> FieldExtractor<M>
where
    M: LanguageModel + Send + Sync + 'static,
    M::Error: std::fmt::Display,
{
    /// Create a new extractor over the given model
    pub fn new(model: M, config: ExtractorConfig) -> Self {
        Self {
            model: Arc::new(model),
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Produce the record for one chunk. Never fails; failures become the
    /// record's status.
    pub async fn extract_chunk(&self, pages: &[Page], chunk: &Chunk) -> ExtractedRecord {
        match self.try_extract(pages, chunk).await {
            Ok(record) => record,
            Err(err) => {
                warn!("chunk {} extraction failed: {}", chunk.id, err);
                match err {
                    ExtractorError::InvalidFormat(_) => ExtractedRecord::parse_failed(chunk.id),
                    ExtractorError::Model(_) | ExtractorError::Timeout(_) => {
                        ExtractedRecord::model_error(chunk.id)
                    }
                }
            }
        }
    }

    /// Produce one record per chunk, in chunk-id order
    pub async fn extract_all(&self, pages: &[Page], chunks: &[Chunk]) -> Vec<ExtractedRecord> {
        info!("extracting fields from {} chunks", chunks.len());

        let mut records = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            records.push(self.extract_chunk(pages, chunk).await);
        }

        let summary = ExtractionSummary::from_records(&records);
        info!(
            "extraction complete: {} ok, {} parse_failed, {} model_error",
            summary.ok, summary.parse_failed, summary.model_error
        );

        records
    }

    async fn try_extract(
        &self,
        pages: &[Page],
        chunk: &Chunk,
    ) -> Result<ExtractedRecord, ExtractorError> {
        let prompt = PromptBuilder::for_chunk(pages, chunk).build();
        debug!("chunk {}: prompt length {} chars", chunk.id, prompt.len());

        let response = timeout(self.config.call_timeout(), self.call_model(prompt))
            .await
            .map_err(|_| ExtractorError::Timeout(self.config.call_timeout_secs))??;
        debug!("chunk {}: response length {} chars", chunk.id, response.len());

        let (document_type, fields) = parse_model_response(&response)?;
        Ok(ExtractedRecord::ok(chunk.id, document_type, fields))
    }

    /// Call the model collaborator
    async fn call_model(&self, prompt: String) -> Result<String, ExtractorError> {
        let model = Arc::clone(&self.model);

        // The LanguageModel trait is blocking; run it off the async worker.
        tokio::task::spawn_blocking(move || {
            model
                .complete(&prompt)
                .map_err(|e| ExtractorError::Model(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Model(format!("task join error: {}", e)))?
    }
}
