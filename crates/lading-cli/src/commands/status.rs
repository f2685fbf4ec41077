//! Status command: show which artifacts exist in the workdir

use crate::cli::StatusArgs;
use crate::error::Result;
use lading_store::Workdir;

/// Execute the status command
pub fn execute_status(args: StatusArgs) -> Result<()> {
    let workdir = Workdir::new(&args.workdir);
    let status = workdir.status();

    let count = |value: Option<usize>| match value {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    };

    println!("Workdir: {}", workdir.base().display());
    println!("  Pages:       {}", count(status.pages));
    println!("  Chunks:      {}", count(status.chunks));
    println!("  Records:     {}", count(status.records));
    println!("  Split files: {}", count(status.split_files));
    Ok(())
}
