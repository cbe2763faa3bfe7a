use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "shapes")]
#[command(about = "Descriptive file names for SVG shape catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer descriptive names for every asset (preview unless --execute)
    Rename {
        /// Catalog root containing brand directories
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Apply the renames instead of only showing them
        #[arg(long)]
        execute: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Regenerate the manifest after applying
        #[arg(long)]
        update_manifest: bool,
    },

    /// Regenerate the manifest from the catalog on disk
    Manifest {
        /// Catalog root containing brand directories
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Show what inference sees in a single asset
    Inspect {
        /// Asset file
        file: PathBuf,

        /// Category label (default: name of the file's directory)
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a default shapes.toml at the catalog root
    Init {
        /// Catalog root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Overwrite an existing shapes.toml
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
