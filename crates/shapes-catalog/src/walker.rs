//! Catalog traversal - `<root>/<brand>/<category>/<file>` in stable order

use std::path::{Path, PathBuf};

use shapes_core::{Asset, Category};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{CatalogError, Result};
use crate::filter::FileFilter;

/// One asset file located in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub brand: String,
    pub category: Category,
}

impl CatalogEntry {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub struct CatalogWalker {
    root: PathBuf,
    brands: Vec<String>,
    filter: FileFilter,
}

impl CatalogWalker {
    pub fn new(root: impl Into<PathBuf>, brands: Vec<String>) -> Self {
        Self {
            root: root.into(),
            brands,
            filter: FileFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Enumerate assets: brands in configured order, categories and files by name.
    ///
    /// Missing brand directories are skipped.
    pub fn walk(&self) -> Result<Vec<CatalogEntry>> {
        if !self.root.is_dir() {
            return Err(CatalogError::RootNotFound(self.root.clone()));
        }

        let mut entries = Vec::new();
        for brand in &self.brands {
            let brand_path = self.root.join(brand);
            if !brand_path.is_dir() {
                debug!("Skipping missing brand directory {}", brand_path.display());
                continue;
            }

            for category_dir in sorted_children(&brand_path)? {
                if !category_dir.file_type().is_dir() {
                    continue;
                }
                let label = category_dir.file_name().to_string_lossy();
                let category = Category::from_label(&label);

                for file in sorted_children(category_dir.path())? {
                    if !file.file_type().is_file() {
                        continue;
                    }
                    let name = file.file_name().to_string_lossy();
                    if !self.filter.accepts(&name) {
                        if let Some(pattern) = self.filter.excluded_by(&name) {
                            debug!("Excluding {} (pattern '{}')", file.path().display(), pattern);
                        }
                        continue;
                    }

                    entries.push(CatalogEntry {
                        path: file.path().to_path_buf(),
                        brand: brand.clone(),
                        category: category.clone(),
                    });
                }
            }
        }

        Ok(entries)
    }

    /// Walk the catalog and read every asset.
    ///
    /// Non-UTF-8 content is read lossily; files that cannot be read at all
    /// are left out of the result.
    pub async fn load_assets(&self) -> Result<Vec<Asset>> {
        let mut assets = Vec::new();
        for entry in self.walk()? {
            let bytes = match tokio::fs::read(&entry.path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("Cannot read {}: {}", entry.path.display(), e);
                    continue;
                }
            };
            let content = match String::from_utf8(bytes) {
                Ok(content) => content,
                Err(e) => {
                    warn!("{} is not valid UTF-8, reading lossily", entry.path.display());
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };

            assets.push(Asset::new(entry.brand, entry.category, &entry.path, content));
        }

        Ok(assets)
    }
}

fn sorted_children(dir: &Path) -> Result<Vec<walkdir::DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(CatalogError::from))
        .collect()
}
