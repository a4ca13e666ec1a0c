//! Domain layer: the time-division catalog and its structural queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod entities;
pub mod error;
pub mod forest;
pub mod interval;
pub mod table;

pub use catalog::{catalog, normalize_id, Catalog, CatalogResult};
pub use entities::*;
pub use error::DomainError;
pub use forest::{build_forest, HierarchyTree, NodeData, TreeNode};
pub use table::{DivisionSpec, GEOLOGIC_TIME_TABLE};
