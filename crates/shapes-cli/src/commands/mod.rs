pub mod init;
pub mod inspect;
pub mod manifest;
pub mod rename;

use anyhow::Result;
use shapes_catalog::{CatalogWalker, FileFilter};
use shapes_config::Config;
use std::path::Path;

/// Catalog walker for `root` configured from `config`
pub fn walker_for(root: &Path, config: &Config) -> Result<CatalogWalker> {
    let filter = FileFilter::new(&config.include, &config.exclude)?;
    Ok(CatalogWalker::new(root, config.brand_ids()).with_filter(filter))
}

/// Horizontal rule used by the text reports
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}
