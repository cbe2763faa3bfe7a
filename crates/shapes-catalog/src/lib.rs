//! Catalog plumbing for shapes
//!
//! This crate provides:
//! - Catalog traversal (brand / category / file, stable order)
//! - Applying a rename plan to the filesystem
//! - Manifest generation

pub mod apply;
pub mod error;
pub mod filter;
pub mod manifest;
pub mod walker;

pub use apply::{AppliedRecord, ApplyOutcome, ApplyReport, apply};
pub use error::{CatalogError, Result};
pub use filter::FileFilter;
pub use manifest::{ManifestEntry, build_manifest, render_manifest, write_manifest};
pub use walker::{CatalogEntry, CatalogWalker};
