//! Rename planning - whole-catalog inference before any file is touched
//!
//! Every asset is named first and collisions are resolved over the complete
//! list, so the plan sees all target names before anything is renamed.
//! Same assets in the same order always give the same plan and fingerprint.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Result;
use crate::asset::Asset;
use crate::category::Category;
use crate::collision::CollisionResolver;
use crate::infer::DescriptorEngine;
use crate::name::DescriptiveName;

/// One planned rename, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub brand: String,
    pub category: Category,
    pub directory: PathBuf,
    pub original_name: String,
    pub new_name: DescriptiveName,
}

impl RenameRecord {
    pub fn source(&self) -> PathBuf {
        self.directory.join(&self.original_name)
    }

    pub fn destination(&self) -> PathBuf {
        self.directory.join(self.new_name.as_str())
    }

    /// Already carries its descriptive name
    pub fn is_unchanged(&self) -> bool {
        self.original_name == self.new_name.as_str()
    }
}

/// Ordered rename mapping for a whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    records: Vec<RenameRecord>,
}

impl RenamePlan {
    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose name actually changes
    pub fn changed(&self) -> impl Iterator<Item = &RenameRecord> {
        self.records.iter().filter(|r| !r.is_unchanged())
    }

    /// blake3 hex digest over every record in order
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for record in &self.records {
            for field in [
                record.brand.as_str(),
                record.category.label(),
                record.original_name.as_str(),
                record.new_name.as_str(),
            ] {
                hasher.update(field.as_bytes());
                hasher.update(b"\0");
            }
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        let value = serde_json::json!({
            "fingerprint": self.fingerprint(),
            "total": self.len(),
            "records": self.records,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Runs inference over a catalog and resolves collisions
pub struct Planner {
    engine: DescriptorEngine,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            engine: DescriptorEngine::new(),
        }
    }

    /// Plan renames for `assets`, which must already be in catalog walk order
    pub fn plan(&self, assets: &[Asset]) -> RenamePlan {
        let named: Vec<(&Asset, DescriptiveName)> = assets
            .iter()
            .map(|asset| (asset, asset.analyze(&self.engine).name))
            .collect();

        let mut resolver = CollisionResolver::new();
        let records: Vec<RenameRecord> = named
            .into_iter()
            .map(|(asset, name)| RenameRecord {
                brand: asset.brand.clone(),
                category: asset.category.clone(),
                directory: asset.directory.clone(),
                original_name: asset.file_name.clone(),
                new_name: resolver.resolve(&asset.directory, name),
            })
            .collect();

        let plan = RenamePlan { records };
        info!(
            "Planned {} assets ({} renamed)",
            plan.len(),
            plan.changed().count()
        );
        plan
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn asset(brand: &str, category: Category, path: &str, content: &str) -> Asset {
        Asset::new(brand, category, Path::new(path), content)
    }

    fn catalog() -> Vec<Asset> {
        vec![
            asset("hmh", Category::Mountains, "hmh/mountains/m_01.svg",
                "<svg><polygon/><polygon/><polygon/><polygon/></svg>"),
            asset("hmh", Category::Waves, "hmh/waves/wave_01.svg", "<svg><path/></svg>"),
            asset("hmh", Category::Waves, "hmh/waves/wave_02.svg", "<svg><path/></svg>"),
            asset("hmh", Category::Waves, "hmh/waves/wave_03.svg", "broken <svg"),
            asset("ss", Category::Waves, "ss/waves/wave_01.svg", "<svg><path/></svg>"),
        ]
    }

    #[test]
    fn test_plan_names_and_collisions() {
        let plan = Planner::new().plan(&catalog());
        let names: Vec<&str> = plan.records().iter().map(|r| r.new_name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "range-mountain.svg",
                "wave.svg",
                "wave-v2.svg",
                "wave-v3.svg",
                "wave.svg",
            ]
        );
        assert_eq!(plan.records()[2].original_name, "wave_02.svg");
        assert_eq!(
            plan.records()[2].destination(),
            PathBuf::from("hmh/waves/wave-v2.svg")
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let planner = Planner::new();
        let first = planner.plan(&catalog());
        let second = Planner::new().plan(&catalog());

        assert_eq!(first, second);
        assert_eq!(first.fingerprint(), second.fingerprint());
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_fingerprint_depends_on_order() {
        let mut assets = catalog();
        let forward = Planner::new().plan(&assets).fingerprint();
        assets.swap(1, 2);
        let swapped = Planner::new().plan(&assets).fingerprint();
        assert_ne!(forward, swapped);
    }

    #[test]
    fn test_unchanged_records() {
        let assets = vec![asset("hmh", Category::Waves, "hmh/waves/wave.svg", "<svg/>")];
        let plan = Planner::new().plan(&assets);
        assert!(plan.records()[0].is_unchanged());
        assert_eq!(plan.changed().count(), 0);
    }

    #[test]
    fn test_json_output() {
        let plan = Planner::new().plan(&catalog());
        let value: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();
        assert_eq!(value["total"], 5);
        assert_eq!(value["records"][0]["category"], "mountains");
        assert_eq!(value["records"][0]["new_name"], "range-mountain.svg");
        assert_eq!(value["fingerprint"].as_str().unwrap().len(), 64);
    }
}
