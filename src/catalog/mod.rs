//! Content element catalog wiring.
//!
//! This module wraps catalog files on disk (for example
//! `catalogs/content_elements.json`) so callers can load a validated snapshot
//! grouped by owning package. Types here mirror the file fields; callers use
//! `CatalogIndex` for lookups and a `CatalogProvider` to hand the snapshot to
//! the selector.

pub mod index;
pub mod model;
pub mod provider;

pub use index::CatalogIndex;
pub use model::{
    Catalog, CatalogDocument, CatalogGroup, ContentElementDefinition, ElementEntry, ElementKey,
    GroupEntry, GroupKey,
};
pub use provider::{CatalogProvider, JsonCatalogProvider, StaticCatalogProvider};

pub use model::load_catalog_from_path;

/// Default relative path to the bundled sample catalog.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/content_elements.json";
