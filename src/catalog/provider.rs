//! Catalog sources: an in-memory snapshot and a lazily loaded JSON file.

use crate::catalog::{Catalog, CatalogIndex};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Source of the full content element catalog.
///
/// Implementations may cache; callers treat the returned catalog as an
/// immutable snapshot for the duration of one resolution.
pub trait CatalogProvider {
    fn catalog(&self) -> Result<&Catalog>;

    /// Icon the provider declares for values that match no element.
    fn default_icon(&self) -> Option<&str> {
        None
    }
}

/// Catalog provider backed by an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    catalog: Catalog,
    default_icon: Option<String>,
}

impl StaticCatalogProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            default_icon: None,
        }
    }

    pub fn with_default_icon(mut self, icon: impl Into<String>) -> Self {
        self.default_icon = Some(icon.into());
        self
    }
}

impl CatalogProvider for StaticCatalogProvider {
    fn catalog(&self) -> Result<&Catalog> {
        Ok(&self.catalog)
    }

    fn default_icon(&self) -> Option<&str> {
        self.default_icon.as_deref()
    }
}

/// Catalog provider that loads a catalog file on first use and keeps the
/// validated index for subsequent calls.
#[derive(Debug)]
pub struct JsonCatalogProvider {
    path: PathBuf,
    index: OnceLock<CatalogIndex>,
}

impl JsonCatalogProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index: OnceLock::new(),
        }
    }

    fn index(&self) -> Result<&CatalogIndex> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }
        let loaded = CatalogIndex::load(&self.path)
            .with_context(|| format!("loading content catalog {}", self.path.display()))?;
        tracing::debug!(
            target: "content_selector::catalog",
            path = %self.path.display(),
            elements = loaded.catalog().element_count(),
            "catalog loaded"
        );
        Ok(self.index.get_or_init(|| loaded))
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn catalog(&self) -> Result<&Catalog> {
        Ok(self.index()?.catalog())
    }

    fn default_icon(&self) -> Option<&str> {
        self.index().ok()?.default_icon()
    }
}
