//! Rename command - preview or apply descriptive names across the catalog

use std::path::PathBuf;

use anyhow::Result;
use shapes_catalog::{ApplyOutcome, ApplyReport, apply};
use shapes_config::Config;
use shapes_core::{Planner, RenamePlan};
use tracing::{info, warn};

use super::{rule, walker_for};
use crate::cli::OutputFormat;

pub async fn handle(
    root: PathBuf,
    execute: bool,
    format: OutputFormat,
    update_manifest: bool,
) -> Result<()> {
    let config = Config::load_for_root(&root)?;
    let walker = walker_for(&root, &config)?;

    // The whole plan exists before anything on disk changes
    let assets = walker.load_assets().await?;
    info!("Loaded {} assets from {}", assets.len(), root.display());
    let plan = Planner::new().plan(&assets);

    if !execute {
        match format {
            OutputFormat::Json => println!("{}", plan.to_json()?),
            OutputFormat::Text => {
                println!("\n*** DRY RUN MODE - No files will be renamed ***");
                print_mapping(&plan, &config);
            }
        }
        return Ok(());
    }

    if format == OutputFormat::Text {
        println!("\n*** EXECUTING RENAME ***\n");
    }

    let report = apply(&plan).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    if update_manifest {
        if manifest_is_due(&report) {
            super::manifest::regenerate(&root, &config, &walker).await?;
        } else {
            warn!(
                "Not updating {}: apply had {} skipped and {} failed",
                config.manifest.file_name,
                report.skipped(),
                report.failed()
            );
        }
    }

    Ok(())
}

/// The manifest is only regenerated after an apply with no skips or failures
fn manifest_is_due(report: &ApplyReport) -> bool {
    report.is_clean()
}

fn print_mapping(plan: &RenamePlan, config: &Config) {
    let heavy = rule('=', 80);
    let mut current_brand: Option<&str> = None;
    let mut current_category: Option<&str> = None;

    println!("\n{heavy}");
    println!("SVG RENAME MAPPING (DRY RUN)");
    println!("{heavy}");

    for record in plan.records() {
        if current_brand != Some(record.brand.as_str()) {
            current_brand = Some(record.brand.as_str());
            current_category = None;
            let heading = config
                .brand(&record.brand)
                .map(|b| b.heading())
                .unwrap_or_else(|| record.brand.clone());
            println!("\n{heavy}");
            println!("BRAND: {heading}");
            println!("{heavy}");
        }

        if current_category != Some(record.category.label()) {
            current_category = Some(record.category.label());
            println!("\n  Category: {}/", record.category);
            println!("  {}", rule('-', 70));
        }

        println!("    {:30} →  {}", record.original_name, record.new_name);
    }

    println!("\n{heavy}");
    println!("TOTAL: {} files to rename", plan.changed().count());
    println!("  ({} assets scanned)", plan.len());
    println!("  fingerprint: {}", plan.fingerprint());
    println!("{heavy}\n");
}

fn print_report(report: &ApplyReport) {
    for result in &report.results {
        let record = &result.record;
        match &result.outcome {
            ApplyOutcome::Renamed => println!(
                "  ✓ {}/{}/{} → {}",
                record.brand, record.category, record.original_name, record.new_name
            ),
            ApplyOutcome::Unchanged => {}
            ApplyOutcome::SkippedMissingSource => {
                println!("  SKIP: {} (file not found)", record.source().display())
            }
            ApplyOutcome::SkippedTargetExists => println!(
                "  SKIP: {} (target already exists)",
                record.destination().display()
            ),
            ApplyOutcome::Failed { cause } => {
                println!("  ERROR: {} - {}", record.source().display(), cause)
            }
        }
    }

    let heavy = rule('=', 80);
    println!("\n{heavy}");
    println!("SUMMARY:");
    println!("  Renamed: {} files", report.renamed());
    println!("  Unchanged: {} files", report.unchanged());
    println!("  Skipped: {} files", report.skipped());
    println!("  Failed: {} files", report.failed());
    println!("{heavy}\n");
}
