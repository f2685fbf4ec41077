//! Split stage: chunks.json + records.json + bundle → split/

use crate::cli::SplitArgs;
use crate::error::Result;
use lading_splitter::{split_chunks, PdfSource};
use lading_store::Workdir;
use tracing::warn;

/// Execute the split stage
pub fn execute_split(args: SplitArgs) -> Result<()> {
    let workdir = Workdir::new(&args.workdir);
    let chunks = workdir.load_chunks()?;

    // Records are consulted for naming only; splitting proceeds without them.
    let records = if workdir.records_path().exists() {
        workdir.load_records()?
    } else {
        warn!("no extraction records found; all output files will be unclassified");
        Vec::new()
    };

    let source = PdfSource::open(&args.source)?;
    let report = split_chunks(&source, &chunks, &records, &workdir.split_dir())?;

    println!(
        "Wrote {} files to {}, skipped {}",
        report.written.len(),
        workdir.split_dir().display(),
        report.skipped.len()
    );
    for skipped in &report.skipped {
        println!("  skipped chunk {}: {}", skipped.chunk_id, skipped.reason);
    }
    Ok(())
}
