//! Inspect command - inference details for one asset

use std::path::PathBuf;

use anyhow::{Context, Result};
use shapes_core::{Asset, Category, DescriptorEngine};

use crate::cli::OutputFormat;

pub async fn handle(file: PathBuf, category: Option<String>, format: OutputFormat) -> Result<()> {
    let bytes = tokio::fs::read(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let label = match category {
        Some(label) => label,
        None => file
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .context("Cannot infer category from path, pass --category")?,
    };
    let category = Category::from_label(&label);

    let asset = Asset::new("", category, &file, content);
    let analysis = asset.analyze(&DescriptorEngine::new());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        OutputFormat::Text => {
            println!("File: {}", file.display());
            println!("  Category: {}", asset.category);
            println!(
                "  Annotation: {}",
                analysis.annotation.as_deref().unwrap_or("(none)")
            );
            println!("  Parsed: {}", if analysis.parsed { "yes" } else { "no" });

            if !analysis.counts.kinds.is_empty() {
                println!("  Elements:");
                for (kind, count) in &analysis.counts.kinds {
                    println!("    {:12} {}", kind, count);
                }
                println!("  No-fill elements: {}", analysis.counts.no_fill);
            }

            if analysis.tokens.is_empty() {
                println!("  Tokens: (none)");
            } else {
                println!("  Tokens: {}", analysis.tokens.join(", "));
            }
            println!("  Name: {}", analysis.name);
        }
    }

    Ok(())
}
