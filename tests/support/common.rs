#![allow(dead_code)]

use anyhow::Result;
use content_selector::{
    Catalog, ColumnTree, ContainerLookup, ContainerRecord, ContentElementDefinition,
    LayoutResolver, LayoutStore, StaticCatalogProvider,
};
use serde_json::{Value, json};
use std::cell::Cell;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub const TEXT_ICON: &str = "icons/text.svg";
pub const IMAGE_ICON: &str = "icons/image.svg";
pub const NEWS_LIST_ICON: &str = "icons/news_list.svg";
pub const FALLBACK_ICON: &str = "icons/fallback.svg";

// Catalog used by the scenario tests: {core: {text, image}, news: {news_list}}.
pub fn scenario_catalog() -> Catalog {
    let mut catalog = Catalog::default();
    for (group, key, label, icon) in [
        ("core", "text", "LLL:EXT:core/locallang.xlf:text", TEXT_ICON),
        ("core", "image", "Image", IMAGE_ICON),
        ("news", "news_list", "News list", NEWS_LIST_ICON),
    ] {
        catalog.push(ContentElementDefinition {
            group_key: group.into(),
            element_key: key.into(),
            label: label.to_string(),
            icon_ref: icon.to_string(),
        });
    }
    catalog
}

pub fn scenario_provider() -> StaticCatalogProvider {
    StaticCatalogProvider::new(scenario_catalog()).with_default_icon(FALLBACK_ICON)
}

pub fn scenario_catalog_json() -> Value {
    json!({
        "schema_version": "content_catalog_v1",
        "default_icon": FALLBACK_ICON,
        "groups": [
            {"key": "core", "elements": [
                {"key": "text", "label": "LLL:EXT:core/locallang.xlf:text", "icon": TEXT_ICON},
                {"key": "image", "label": "Image", "icon": IMAGE_ICON}
            ]},
            {"key": "news", "elements": [
                {"key": "news_list", "label": "News list", "icon": NEWS_LIST_ICON}
            ]}
        ]
    })
}

// Containers: 1 allows text, 2 denies image, 3 has no layout, 4 mixes
// allow and deny across two rows, 5 has an empty grid.
pub fn layouts_json() -> Value {
    json!({
        "containers": [
            {"id": "1", "layout": "text_only"},
            {"id": "2", "layout": "no_images"},
            {"id": "3"},
            {"id": "4", "layout": "mixed"},
            {"id": "5", "layout": "plain"}
        ],
        "layouts": {
            "text_only": {"rows": [{"columns": [
                {"name": "main", "variables": {"Fluidcontent.allowedContentTypes": "text"}},
                {"name": "aside"}
            ]}]},
            "no_images": {"rows": [{"columns": [
                {"name": "main", "variables": {"Fluidcontent.deniedContentTypes": "image"}}
            ]}]},
            "mixed": {"rows": [
                {"columns": [{"name": "left", "variables": {"Fluidcontent.deniedContentTypes": "text"}}]},
                {"columns": [{"name": "right", "variables": {"Fluidcontent.allowedContentTypes": "text,news_list"}}]}
            ]},
            "plain": {"rows": [{"columns": [{"name": "main", "variables": {}}]}]}
        }
    })
}

pub fn layout_store() -> LayoutStore {
    serde_json::from_value(layouts_json()).expect("layout fixture is valid")
}

pub fn write_json(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn bin_path(name: &str) -> PathBuf {
    match name {
        "content-select" => PathBuf::from(env!("CARGO_BIN_EXE_content-select")),
        "catalog-validate" => PathBuf::from(env!("CARGO_BIN_EXE_catalog-validate")),
        other => panic!("unknown binary {other}"),
    }
}

// Counts collaborator calls so tests can assert which lookups happened.
#[derive(Default)]
pub struct CountingStore {
    pub inner: LayoutStore,
    pub container_calls: Cell<usize>,
    pub layout_calls: Cell<usize>,
}

impl CountingStore {
    pub fn new(inner: LayoutStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }
}

impl ContainerLookup for CountingStore {
    fn container(&self, id: &str) -> Result<Option<ContainerRecord>> {
        self.container_calls.set(self.container_calls.get() + 1);
        self.inner.container(id)
    }
}

impl LayoutResolver for CountingStore {
    fn column_tree(&self, container: &ContainerRecord) -> Result<Option<ColumnTree>> {
        self.layout_calls.set(self.layout_calls.get() + 1);
        self.inner.column_tree(container)
    }
}
