//! Run command: all pipeline stages back to back

use super::extract::extract_with_progress;
use super::load_config;
use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use lading_domain::verify_partition;
use lading_extractor::{chunk_pages_with, ExtractionSummary, KeywordBoundary};
use lading_llm::OllamaModel;
use lading_splitter::{split_chunks, PdfSource};
use lading_store::{ingest_text_dir, Workdir};

/// Execute every stage and report the run's counts
pub async fn execute_run(args: RunArgs) -> Result<()> {
    let workdir = Workdir::new(&args.workdir);
    workdir.create()?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    config.validate().map_err(CliError::Config)?;

    // Ingest
    let store = ingest_text_dir(&args.text_dir)?;
    workdir.save_pages(&store)?;
    println!("Ingested {} pages", store.len());

    // Chunk
    let chunks = chunk_pages_with(
        store.pages(),
        &KeywordBoundary::default(),
        config.blank_threshold,
    );
    verify_partition(&chunks, store.len())?;
    workdir.save_chunks(&chunks)?;
    println!("Chunked into {} documents", chunks.len());

    // Extract
    let model = OllamaModel::with_timeout(&config.endpoint, &config.model, config.call_timeout());
    let records = extract_with_progress(&workdir, store.pages(), &chunks, model, config).await?;
    workdir.save_records(&records)?;

    // Split
    let source = PdfSource::open(&args.source)?;
    let report = split_chunks(&source, &chunks, &records, &workdir.split_dir())?;

    let summary = ExtractionSummary::from_records(&records);
    println!();
    println!("Chunks produced: {}", chunks.len());
    println!("Records ok:      {}", summary.ok);
    println!("Parse failures:  {}", summary.parse_failed);
    println!("Model errors:    {}", summary.model_error);
    println!("Files written:   {}", report.written.len());
    println!("Files skipped:   {}", report.skipped.len());
    for skipped in &report.skipped {
        println!("  skipped chunk {}: {}", skipped.chunk_id, skipped.reason);
    }
    Ok(())
}
