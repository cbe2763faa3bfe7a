//! Structural feature counts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::Element;

/// Element kinds the inference rules look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Polygon,
    Circle,
    Path,
    Rect,
    Ellipse,
    Line,
}

impl ElementKind {
    /// Kinds that make up the filled-area total used by the outline ratio
    pub const SHAPES: [ElementKind; 5] = [
        ElementKind::Polygon,
        ElementKind::Circle,
        ElementKind::Path,
        ElementKind::Rect,
        ElementKind::Ellipse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Polygon => "polygon",
            ElementKind::Circle => "circle",
            ElementKind::Path => "path",
            ElementKind::Rect => "rect",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Line => "line",
        }
    }
}

/// Per-kind element counts across a whole tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCounts {
    pub kinds: BTreeMap<String, usize>,
    /// Elements carrying `fill="none"`
    pub no_fill: usize,
}

impl FeatureCounts {
    /// Count every element under `tree`, root included. No tree means all zeros.
    pub fn from_tree(tree: Option<&Element>) -> Self {
        let mut counts = Self::default();
        let Some(root) = tree else {
            return counts;
        };

        for element in root.iter() {
            *counts
                .kinds
                .entry(local_kind(&element.name).to_string())
                .or_default() += 1;

            if element.attribute("fill") == Some("none") {
                counts.no_fill += 1;
            }
        }

        counts
    }

    pub fn with_kind(mut self, kind: ElementKind, count: usize) -> Self {
        self.kinds.insert(kind.as_str().to_string(), count);
        self
    }

    pub fn with_no_fill(mut self, count: usize) -> Self {
        self.no_fill = count;
        self
    }

    pub fn get(&self, kind: &str) -> usize {
        self.kinds.get(kind).copied().unwrap_or(0)
    }

    pub fn of(&self, kind: ElementKind) -> usize {
        self.get(kind.as_str())
    }

    pub fn shape_total(&self) -> usize {
        ElementKind::SHAPES.iter().map(|kind| self.of(*kind)).sum()
    }
}

/// Strip a `prefix:` or `{namespace}` qualifier from an element name
fn local_kind(name: &str) -> &str {
    let name = name.rsplit('}').next().unwrap_or(name);
    name.rsplit(':').next().unwrap_or(name)
}
