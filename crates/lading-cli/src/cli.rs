//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lading CLI - split scanned oil-trading document bundles into classified documents.
#[derive(Debug, Parser)]
#[command(name = "lading")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline stages, each runnable on its own against the same workdir.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Materialize the page text store from per-page OCR text files
    Ingest(IngestArgs),

    /// Group pages into logical documents
    Chunk(ChunkArgs),

    /// Classify each document and extract its fields via the model
    Extract(ExtractArgs),

    /// Split the original bundle into one file per document
    Split(SplitArgs),

    /// Run all stages back to back
    Run(RunArgs),

    /// Show which artifacts exist in the workdir
    Status(StatusArgs),
}

/// Arguments for the ingest stage.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Directory of per-page OCR text files (page_000.txt, page_001.txt, ...)
    #[arg(short, long)]
    pub text_dir: PathBuf,

    /// Pipeline working directory
    #[arg(short, long)]
    pub workdir: PathBuf,
}

/// Arguments for the chunk stage.
#[derive(Debug, Parser)]
pub struct ChunkArgs {
    /// Pipeline working directory
    #[arg(short, long)]
    pub workdir: PathBuf,

    /// Extractor configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the extract stage.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Pipeline working directory
    #[arg(short, long)]
    pub workdir: PathBuf,

    /// Extractor configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model to run, overriding the configuration
    #[arg(short, long)]
    pub model: Option<String>,

    /// Model endpoint, overriding the configuration
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

/// Arguments for the split stage.
#[derive(Debug, Parser)]
pub struct SplitArgs {
    /// Pipeline working directory
    #[arg(short, long)]
    pub workdir: PathBuf,

    /// The original paginated bundle (PDF)
    #[arg(short, long)]
    pub source: PathBuf,
}

/// Arguments for running all stages.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Directory of per-page OCR text files
    #[arg(short, long)]
    pub text_dir: PathBuf,

    /// Pipeline working directory
    #[arg(short, long)]
    pub workdir: PathBuf,

    /// The original paginated bundle (PDF)
    #[arg(short, long)]
    pub source: PathBuf,

    /// Extractor configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model to run, overriding the configuration
    #[arg(short, long)]
    pub model: Option<String>,

    /// Model endpoint, overriding the configuration
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Pipeline working directory
    #[arg(short, long)]
    pub workdir: PathBuf,
}
