use anyhow::Result;
use shapes_config::{Config, PROJECT_FILE};
use std::path::PathBuf;

pub fn handle(root: PathBuf, force: bool) -> Result<()> {
    let path = root.join(PROJECT_FILE);

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = Config::default();
    let written = config.save_project(&root)?;

    println!("✓ Created {}", written.display());
    println!("  Brands: {}", config.brand_ids().join(", "));
    println!("  Run 'shapes rename' to preview descriptive names");

    Ok(())
}
