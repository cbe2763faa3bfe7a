mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Rename {
            root,
            execute,
            format,
            update_manifest,
        } => commands::rename::handle(root, execute, format, update_manifest).await,
        cli::Commands::Manifest { root } => commands::manifest::handle(root).await,
        cli::Commands::Inspect {
            file,
            category,
            format,
        } => commands::inspect::handle(file, category, format).await,
        cli::Commands::Init { root, force } => commands::init::handle(root, force),
    }
}
