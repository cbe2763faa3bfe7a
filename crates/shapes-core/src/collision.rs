//! Collision resolution across a destination directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::name::DescriptiveName;

/// Hands out unique names per directory in the order they are requested.
///
/// The first occurrence of a name keeps it; the Nth becomes `stem-vN.svg`.
/// Results depend on call order, so callers must feed names in a stable order.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    seen: HashMap<(PathBuf, DescriptiveName), usize>,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, directory: &Path, name: DescriptiveName) -> DescriptiveName {
        let count = self
            .seen
            .entry((directory.to_path_buf(), name.clone()))
            .or_default();
        *count += 1;

        if *count == 1 {
            name
        } else {
            name.versioned(*count)
        }
    }
}
