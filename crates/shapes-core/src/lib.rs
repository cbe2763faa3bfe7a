//! Core domain models and naming logic for shapes
//!
//! This crate contains:
//! - Domain models (Asset, Category, RenameRecord)
//! - Descriptor inference (annotation, feature counts, category rules)
//! - Name synthesis and collision resolution
//! - Whole-catalog rename planning

pub mod asset;
pub mod category;
pub mod collision;
pub mod error;
pub mod extract;
pub mod features;
pub mod infer;
pub mod name;
pub mod plan;

pub use asset::{Analysis, Asset};
pub use category::Category;
pub use collision::CollisionResolver;
pub use error::{Error, Result};
pub use extract::{Element, Extraction, extract};
pub use features::{ElementKind, FeatureCounts};
pub use infer::{ClassificationInput, DescriptorEngine, Rule, Token};
pub use name::{DescriptiveName, synthesize};
pub use plan::{Planner, RenamePlan, RenameRecord};
