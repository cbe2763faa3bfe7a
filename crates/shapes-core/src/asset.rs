use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::category::Category;
use crate::extract::extract;
use crate::features::FeatureCounts;
use crate::infer::{ClassificationInput, DescriptorEngine, Token};
use crate::name::{DescriptiveName, synthesize};

/// One asset file as found in the catalog. Content is read once and never changed.
#[derive(Debug, Clone)]
pub struct Asset {
    pub brand: String,
    pub category: Category,
    pub file_name: String,
    pub directory: PathBuf,
    pub content: String,
}

impl Asset {
    pub fn new(
        brand: impl Into<String>,
        category: Category,
        path: &Path,
        content: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            category,
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Extract, count, infer and synthesize a name for this asset
    pub fn analyze(&self, engine: &DescriptorEngine) -> Analysis {
        let extraction = extract(&self.content);
        let counts = FeatureCounts::from_tree(extraction.tree.as_ref());
        let input = ClassificationInput::new(
            extraction.annotation.as_deref(),
            &self.category,
            &counts,
        );
        let tokens = engine.infer(&input);
        let name = synthesize(&tokens, &self.category);

        debug!(
            "{}/{}/{}: parsed={} tokens={:?} -> {}",
            self.brand,
            self.category,
            self.file_name,
            extraction.is_parsed(),
            tokens,
            name
        );

        Analysis {
            parsed: extraction.is_parsed(),
            annotation: extraction.annotation,
            counts,
            tokens,
            name,
        }
    }
}

/// Inference result for one asset
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub annotation: Option<String>,
    pub parsed: bool,
    pub counts: FeatureCounts,
    pub tokens: Vec<Token>,
    pub name: DescriptiveName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_heart() {
        let content = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <!-- Double heart cluster, bold outline -->
  <polygon fill="none" points="0,0 1,1 2,0"/>
  <circle fill="none" r="1"/>
  <circle fill="none" r="1"/>
  <circle fill="none" r="1"/>
  <circle r="1"/>
  <circle r="1"/>
</svg>"#;
        let asset = Asset::new("hmh", Category::Hearts, Path::new("hmh/hearts/heart_01.svg"), content);
        let analysis = asset.analyze(&DescriptorEngine::new());

        assert!(analysis.parsed);
        assert_eq!(analysis.counts.no_fill, 4);
        assert_eq!(analysis.tokens, vec!["double", "bold", "outline", "cluster"]);
        assert_eq!(analysis.name.as_str(), "double-bold-outline-heart.svg");
    }

    #[test]
    fn test_analyze_unparsable_content() {
        let content = "<!-- Soft wavy blob --><svg><path></svg";
        let asset = Asset::new("ss", Category::Blobs, Path::new("ss/blobs/blob_02.svg"), content);
        let analysis = asset.analyze(&DescriptorEngine::new());

        assert!(!analysis.parsed);
        assert_eq!(analysis.counts.shape_total(), 0);
        assert_eq!(analysis.name.as_str(), "wavy-soft-blob.svg");
    }

    #[test]
    fn test_paths() {
        let asset = Asset::new("hmh", Category::Waves, Path::new("root/hmh/waves/w.svg"), "");
        assert_eq!(asset.file_name, "w.svg");
        assert_eq!(asset.directory, PathBuf::from("root/hmh/waves"));
        assert_eq!(asset.path(), PathBuf::from("root/hmh/waves/w.svg"));
    }
}
