//! Container records and their grid layouts.
//!
//! The selector only needs two things from the surrounding content store: the
//! container record an element is being placed into, and the rows/columns of
//! that container's grid. Both are reached through the `ContainerLookup` and
//! `LayoutResolver` traits so a CMS adapter or a test double can supply them.
//! `LayoutStore` is a JSON-file implementation of both.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Column variable holding the comma-separated allow-list.
pub const ALLOWED_CONTENT_TYPES_VARIABLE: &str = "Fluidcontent.allowedContentTypes";
/// Column variable holding the comma-separated deny-list.
pub const DENIED_CONTENT_TYPES_VARIABLE: &str = "Fluidcontent.deniedContentTypes";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    #[serde(default)]
    pub layout: Option<String>,
}

/// The two column variables the selector consults. Any other variable a
/// grid column carries is dropped during deserialization.
///
/// Each list may be stored under its namespaced key or its bare key; when a
/// column carries both, the namespaced one wins. Non-string values count as
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct ColumnVariables {
    pub allowed_content_types: Option<String>,
    pub denied_content_types: Option<String>,
}

impl From<BTreeMap<String, Value>> for ColumnVariables {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let lookup = |namespaced: &str| {
            let bare = namespaced.rsplit('.').next().unwrap_or(namespaced);
            [namespaced, bare]
                .into_iter()
                .find_map(|key| raw.get(key).and_then(Value::as_str))
                .map(str::to_string)
        };
        Self {
            allowed_content_types: lookup(ALLOWED_CONTENT_TYPES_VARIABLE),
            denied_content_types: lookup(DENIED_CONTENT_TYPES_VARIABLE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GridColumn {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variables: ColumnVariables,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GridRow {
    #[serde(default)]
    pub columns: Vec<GridColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColumnTree {
    #[serde(default)]
    pub rows: Vec<GridRow>,
}

impl ColumnTree {
    pub fn columns(&self) -> impl Iterator<Item = &GridColumn> {
        self.rows.iter().flat_map(|row| row.columns.iter())
    }
}

/// Fetches container records by identifier.
pub trait ContainerLookup {
    /// `Ok(None)` when no container has this id; `Err` only when the backing
    /// store cannot be read.
    fn container(&self, id: &str) -> Result<Option<ContainerRecord>>;
}

/// Resolves the parsed grid of a container.
pub trait LayoutResolver {
    /// `Ok(None)` when the container declares no grid.
    fn column_tree(&self, container: &ContainerRecord) -> Result<Option<ColumnTree>>;
}

/// Containers and named layouts loaded from one JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutStore {
    #[serde(default)]
    pub containers: Vec<ContainerRecord>,
    #[serde(default)]
    pub layouts: BTreeMap<String, ColumnTree>,
}

impl LayoutStore {
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening layout store {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing layout store {}", path.display()))
    }

    pub fn with_container(mut self, id: &str, layout: Option<&str>) -> Self {
        self.containers.push(ContainerRecord {
            id: id.to_string(),
            layout: layout.map(str::to_string),
        });
        self
    }

    pub fn with_layout(mut self, name: &str, tree: ColumnTree) -> Self {
        self.layouts.insert(name.to_string(), tree);
        self
    }
}

impl ContainerLookup for LayoutStore {
    fn container(&self, id: &str) -> Result<Option<ContainerRecord>> {
        let id = id.trim();
        Ok(self
            .containers
            .iter()
            .find(|record| record.id.trim() == id)
            .cloned())
    }
}

impl LayoutResolver for LayoutStore {
    fn column_tree(&self, container: &ContainerRecord) -> Result<Option<ColumnTree>> {
        let Some(name) = container.layout.as_deref().filter(|name| !name.is_empty()) else {
            return Ok(None);
        };
        Ok(self.layouts.get(name).cloned())
    }
}
