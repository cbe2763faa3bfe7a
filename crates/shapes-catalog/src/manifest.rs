//! Manifest index of the catalog as it currently exists on disk

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::walker::CatalogEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub brand: String,
    pub category: String,
    /// File name without extension
    pub name: String,
    /// Path relative to the catalog root, always `/`-separated
    pub file: String,
}

impl From<&CatalogEntry> for ManifestEntry {
    fn from(entry: &CatalogEntry) -> Self {
        let file_name = entry.file_name();
        let name = Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());
        let category = entry.category.label().to_string();

        Self {
            file: format!("{}/{}/{}", entry.brand, category, file_name),
            brand: entry.brand.clone(),
            category,
            name,
        }
    }
}

/// Manifest records for walked entries, same order
pub fn build_manifest(entries: &[CatalogEntry]) -> Vec<ManifestEntry> {
    entries.iter().map(ManifestEntry::from).collect()
}

/// Pretty-printed JSON array with two-space indentation
pub fn render_manifest(manifest: &[ManifestEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Replace the manifest file at `path`
pub async fn write_manifest(path: &Path, manifest: &[ManifestEntry]) -> Result<()> {
    let content = render_manifest(manifest)?;
    tokio::fs::write(path, content).await?;
    info!("Wrote {} manifest entries to {}", manifest.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapes_core::Category;
    use std::path::PathBuf;

    fn entry(path: &str, brand: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            path: PathBuf::from(path),
            brand: brand.to_string(),
            category: Category::from_label(category),
        }
    }

    #[test]
    fn test_entry_fields() {
        let manifest = build_manifest(&[entry(
            "/assets/hmh/speech_bubbles/thought-bubble.svg",
            "hmh",
            "speech_bubbles",
        )]);

        assert_eq!(
            manifest[0],
            ManifestEntry {
                brand: "hmh".to_string(),
                category: "speech_bubbles".to_string(),
                name: "thought-bubble".to_string(),
                file: "hmh/speech_bubbles/thought-bubble.svg".to_string(),
            }
        );
    }

    #[test]
    fn test_render_format() {
        let manifest = build_manifest(&[entry("/a/ss/waves/wave.svg", "ss", "waves")]);
        let json = render_manifest(&manifest).unwrap();
        let expected = r#"[
  {
    "brand": "ss",
    "category": "waves",
    "name": "wave",
    "file": "ss/waves/wave.svg"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_manifest() {
        assert_eq!(render_manifest(&[]).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        write_manifest(&path, &[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
