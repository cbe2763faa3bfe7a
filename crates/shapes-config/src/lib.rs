use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project config file looked up at the catalog root
pub const PROJECT_FILE: &str = "shapes.toml";

/// Configuration for shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Glob selecting asset files inside a category directory
    #[serde(default = "default_include")]
    pub include: String,

    /// Globs for files to leave out (matched against the file name)
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Brand directories, walked in this order
    #[serde(default = "default_brands")]
    pub brands: Vec<BrandConfig>,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub id: String,

    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_file")]
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
            brands: default_brands(),
            manifest: ManifestConfig::default(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file_name: default_manifest_file(),
        }
    }
}

impl BrandConfig {
    /// Heading used when printing a brand, e.g. `Hot Mess Home (hmh)`
    pub fn heading(&self) -> String {
        match &self.display_name {
            Some(name) => format!("{} ({})", name, self.id),
            None => self.id.clone(),
        }
    }
}

fn default_brands() -> Vec<BrandConfig> {
    vec![
        BrandConfig {
            id: "hmh".to_string(),
            display_name: Some("Hot Mess Home".to_string()),
        },
        BrandConfig {
            id: "ss".to_string(),
            display_name: Some("Sagebrush & Steel".to_string()),
        },
    ]
}

fn default_include() -> String {
    "*.svg".to_string()
}

fn default_manifest_file() -> String {
    "manifest.json".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Config for a catalog: `shapes.toml` at the root wins over the global file
    pub fn load_for_root(root: &Path) -> anyhow::Result<Self> {
        let project = root.join(PROJECT_FILE);
        if project.exists() {
            Self::load_from(&project)
        } else {
            Self::load()
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write this config as `shapes.toml` at `root`
    pub fn save_project(&self, root: &Path) -> anyhow::Result<PathBuf> {
        let path = root.join(PROJECT_FILE);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "shapes", "shapes") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.shapes/config.toml")
        }
    }

    pub fn brand_ids(&self) -> Vec<String> {
        self.brands.iter().map(|b| b.id.clone()).collect()
    }

    pub fn brand(&self, id: &str) -> Option<&BrandConfig> {
        self.brands.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.brand_ids(), vec!["hmh", "ss"]);
        assert_eq!(config.include, "*.svg");
        assert_eq!(config.manifest.file_name, "manifest.json");
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.brands, config.brands);
        assert_eq!(parsed.include, config.include);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"
exclude = ["draft_*"]

[[brands]]
id = "acme"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.brand_ids(), vec!["acme"]);
        assert_eq!(config.brand("acme").unwrap().heading(), "acme");
        assert_eq!(config.exclude, vec!["draft_*"]);
        assert_eq!(config.include, "*.svg");
        assert_eq!(config.manifest.file_name, "manifest.json");
    }

    #[test]
    fn test_brand_heading() {
        let config = Config::default();
        assert_eq!(
            config.brand("ss").unwrap().heading(),
            "Sagebrush & Steel (ss)"
        );
        assert!(config.brand("nope").is_none());
    }

    #[test]
    fn test_project_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.include = "*.SVG".to_string();
        config.save_project(dir.path()).unwrap();

        let loaded = Config::load_for_root(dir.path()).unwrap();
        assert_eq!(loaded.include, "*.SVG");
    }
}
