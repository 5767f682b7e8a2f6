//! Indexed view of a content element catalog.
//!
//! The index enforces the expected catalog schema version and provides fast
//! lookup by element key. It rejects duplicate keys and unknown schema
//! versions so a selector never offers two options that store the same value.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{Catalog, CatalogDocument, ContentElementDefinition, ElementKey};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub const DEFAULT_SCHEMA_VERSION: &str = "content_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "CONTENT_SELECTOR_CATALOG_SCHEMAS";

#[derive(Debug, Clone)]
/// Content element catalog plus a derived index keyed by element key.
pub struct CatalogIndex {
    catalog: Catalog,
    default_icon: Option<String>,
    by_key: BTreeMap<ElementKey, (usize, usize)>,
}

impl CatalogIndex {
    /// Load and validate the catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let document =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_document(&document)
    }

    /// Validate an already parsed catalog document.
    ///
    /// Checks the schema version, requires non-empty group and element keys,
    /// and enforces that every element key is unique across all groups.
    pub fn from_document(document: &CatalogDocument) -> Result<Self> {
        validate_schema_version(&document.schema_version)?;
        let catalog = document.to_catalog();
        let by_key = build_index(&catalog)?;
        Ok(Self {
            catalog,
            default_icon: document
                .default_icon
                .clone()
                .filter(|icon| !icon.trim().is_empty()),
            by_key,
        })
    }

    /// Resolve an element by key.
    pub fn element(&self, key: &str) -> Option<&ContentElementDefinition> {
        let (group, element) = *self.by_key.get(&ElementKey::from(key))?;
        self.catalog.groups.get(group)?.elements.get(element)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Icon the catalog document declares for unmatched values, if any.
    pub fn default_icon(&self) -> Option<&str> {
        self.default_icon.as_deref()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        versions.extend(crate::split_list(&raw));
    }
    versions
}

fn build_index(catalog: &Catalog) -> Result<BTreeMap<ElementKey, (usize, usize)>> {
    let mut group_keys = BTreeSet::new();
    let mut map: BTreeMap<ElementKey, (usize, usize)> = BTreeMap::new();
    for (group_idx, group) in catalog.groups.iter().enumerate() {
        if group.key.0.trim().is_empty() {
            bail!("encountered group with no key");
        }
        if !group_keys.insert(group.key.clone()) {
            bail!("duplicate group key {}", group.key);
        }
        for (element_idx, element) in group.elements.iter().enumerate() {
            if element.element_key.0.trim().is_empty() {
                bail!("group {} contains an element with no key", group.key);
            }
            if let Some(&(existing, _)) = map.get(&element.element_key) {
                bail!(
                    "duplicate element key {} (groups {} and {})",
                    element.element_key,
                    catalog.groups[existing].key,
                    group.key
                );
            }
            map.insert(element.element_key.clone(), (group_idx, element_idx));
        }
    }
    Ok(map)
}
