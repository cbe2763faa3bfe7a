use glob::{MatchOptions, Pattern};

use crate::error::Result;

// `*` also matches dot-files; hide them with an exclude pattern such as `.*`
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Selects asset files by name using glob patterns
pub struct FileFilter {
    include: Pattern,
    exclude: Vec<Pattern>,
}

impl FileFilter {
    /// Create a filter from an include pattern and exclude patterns
    pub fn new(include: &str, exclude: &[String]) -> Result<Self> {
        let include = Pattern::new(include)?;
        let exclude = exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { include, exclude })
    }

    /// Check if a file name belongs in the catalog
    pub fn accepts(&self, file_name: &str) -> bool {
        self.include.matches_with(file_name, MATCH_OPTIONS) && self.excluded_by(file_name).is_none()
    }

    /// Get first matching exclude pattern (for log messages)
    pub fn excluded_by(&self, file_name: &str) -> Option<&str> {
        self.exclude
            .iter()
            .find(|p| p.matches_with(file_name, MATCH_OPTIONS))
            .map(|p| p.as_str())
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            include: Pattern::new("*.svg").expect("static pattern"),
            exclude: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_svg_only() {
        let filter = FileFilter::default();

        assert!(filter.accepts("blob_01.svg"));
        assert!(!filter.accepts("blob_01.SVG"));
        assert!(!filter.accepts("notes.txt"));
        assert!(filter.accepts(".draft.svg"));
    }

    #[test]
    fn test_dot_files_excluded_explicitly() {
        let filter = FileFilter::new("*.svg", &[".*".to_string()]).unwrap();

        assert!(filter.accepts("wave_01.svg"));
        assert!(!filter.accepts(".draft.svg"));
        assert_eq!(filter.excluded_by(".draft.svg"), Some(".*"));
    }

    #[test]
    fn test_exclude_patterns() {
        let filter = FileFilter::new("*.svg", &["draft_*".to_string()]).unwrap();

        assert!(filter.accepts("wave_01.svg"));
        assert!(!filter.accepts("draft_wave.svg"));
        assert_eq!(filter.excluded_by("draft_wave.svg"), Some("draft_*"));
        assert_eq!(filter.excluded_by("wave_01.svg"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileFilter::new("[", &[]).is_err());
        assert!(FileFilter::new("*.svg", &["[".to_string()]).is_err());
    }
}
