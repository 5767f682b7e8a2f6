//! Content element type selection for grid containers.
//!
//! Resolves which registered content element types an editor may place into
//! a container's grid (allow/deny lists declared on the grid columns), filters
//! the catalog accordingly and builds the grouped option set shown in the
//! selection field.

pub mod catalog;
pub mod config;
pub mod layout;
pub mod localize;
pub mod options;
pub mod render;
pub mod restrictions;
pub mod schema_loader;
pub mod selector;

pub use catalog::{
    Catalog, CatalogDocument, CatalogGroup, CatalogIndex, CatalogProvider,
    ContentElementDefinition, DEFAULT_CATALOG_PATH, ElementKey, GroupKey, JsonCatalogProvider,
    StaticCatalogProvider, load_catalog_from_path,
};
pub use config::SelectorConfig;
pub use layout::{
    ColumnTree, ColumnVariables, ContainerLookup, ContainerRecord, GridColumn, GridRow,
    LayoutResolver, LayoutStore,
};
pub use localize::{IdentityLocalizer, LABEL_REFERENCE_PREFIX, Localizer, MapLocalizer};
pub use options::{EmptyOption, OptionGroup, OptionSet, SelectOption};
pub use restrictions::{RestrictionLists, extract, filter, normalize_identifiers};
pub use schema_loader::{DocumentKind, SchemaValidator};
pub use selector::ContentSelector;

/// Splits a comma-separated list, dropping blanks around and between items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
