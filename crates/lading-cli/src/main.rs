//! Lading CLI - stage-by-stage driver for the document bundle pipeline.

use clap::Parser;
use lading_cli::commands;
use lading_cli::{Cli, Command};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> lading_cli::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ingest(args) => commands::execute_ingest(args),
        Command::Chunk(args) => commands::execute_chunk(args),
        Command::Extract(args) => commands::execute_extract(args).await,
        Command::Split(args) => commands::execute_split(args),
        Command::Run(args) => commands::execute_run(args).await,
        Command::Status(args) => commands::execute_status(args),
    }
}
