//! Ingest stage: OCR text files → pages.json

use crate::cli::IngestArgs;
use crate::error::Result;
use lading_store::{ingest_text_dir, Workdir};

/// Execute the ingest stage
pub fn execute_ingest(args: IngestArgs) -> Result<()> {
    let workdir = Workdir::new(&args.workdir);
    workdir.create()?;

    let store = ingest_text_dir(&args.text_dir)?;
    workdir.save_pages(&store)?;

    println!(
        "Ingested {} pages into {}",
        store.len(),
        workdir.pages_path().display()
    );
    Ok(())
}
