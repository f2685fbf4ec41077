//! Extract stage: pages.json + chunks.json → records.json

use super::load_config;
use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use lading_domain::traits::LanguageModel;
use lading_domain::{Chunk, ExtractedRecord, Page};
use lading_extractor::{ExtractionSummary, ExtractorConfig, FieldExtractor};
use lading_llm::OllamaModel;
use lading_store::Workdir;

/// Execute the extract stage
pub async fn execute_extract(args: ExtractArgs) -> Result<()> {
    let workdir = Workdir::new(&args.workdir);
    let mut config = load_config(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    config.validate().map_err(CliError::Config)?;

    let store = workdir.load_pages()?;
    let chunks = workdir.load_chunks()?;

    let model = OllamaModel::with_timeout(&config.endpoint, &config.model, config.call_timeout());
    let records = extract_with_progress(&workdir, store.pages(), &chunks, model, config).await?;
    workdir.save_records(&records)?;

    let summary = ExtractionSummary::from_records(&records);
    println!(
        "Extracted {} records: {} ok, {} parse_failed, {} model_error",
        summary.total, summary.ok, summary.parse_failed, summary.model_error
    );
    Ok(())
}

/// Drive the per-chunk extraction loop with a progress bar, logging failed
/// chunks to the workdir as they happen
pub(crate) async fn extract_with_progress<M>(
    workdir: &Workdir,
    pages: &[Page],
    chunks: &[Chunk],
    model: M,
    config: ExtractorConfig,
) -> Result<Vec<ExtractedRecord>>
where
    M: LanguageModel + Send + Sync + 'static,
    M::Error: std::fmt::Display,
{
    let extractor = FieldExtractor::new(model, config);

    let pb = ProgressBar::new(chunks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut records = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let record = extractor.extract_chunk(pages, chunk).await;
        if !record.is_ok() {
            workdir.append_failed(chunk.id, record.status.as_str())?;
        }
        pb.inc(1);
        records.push(record);
    }
    pb.finish_and_clear();

    Ok(records)
}
