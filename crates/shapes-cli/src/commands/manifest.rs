use anyhow::Result;
use shapes_catalog::{CatalogWalker, build_manifest, write_manifest};
use shapes_config::Config;
use std::path::{Path, PathBuf};

use super::walker_for;

pub async fn handle(root: PathBuf) -> Result<()> {
    let config = Config::load_for_root(&root)?;
    let walker = walker_for(&root, &config)?;
    regenerate(&root, &config, &walker).await
}

/// Rebuild the manifest from what is on disk now
pub async fn regenerate(root: &Path, config: &Config, walker: &CatalogWalker) -> Result<()> {
    let manifest = build_manifest(&walker.walk()?);
    let path = root.join(&config.manifest.file_name);
    write_manifest(&path, &manifest).await?;

    println!(
        "✓ Updated {} with {} entries",
        config.manifest.file_name,
        manifest.len()
    );

    Ok(())
}
