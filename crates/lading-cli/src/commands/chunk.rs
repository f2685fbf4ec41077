//! Chunk stage: pages.json → chunks.json

use super::load_config;
use crate::cli::ChunkArgs;
use crate::error::Result;
use lading_domain::verify_partition;
use lading_extractor::{chunk_pages_with, KeywordBoundary};
use lading_store::Workdir;

/// Execute the chunk stage
pub fn execute_chunk(args: ChunkArgs) -> Result<()> {
    let workdir = Workdir::new(&args.workdir);
    let config = load_config(args.config.as_deref())?;

    let store = workdir.load_pages()?;
    let chunks = chunk_pages_with(
        store.pages(),
        &KeywordBoundary::default(),
        config.blank_threshold,
    );
    verify_partition(&chunks, store.len())?;

    workdir.save_chunks(&chunks)?;
    println!(
        "Chunked {} pages into {} documents",
        store.len(),
        chunks.len()
    );
    Ok(())
}
