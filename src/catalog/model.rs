//! Catalog types and the on-disk catalog document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
/// Identifier of a content element type; the value stored when it is selected.
pub struct ElementKey(pub String);

impl ElementKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
/// Identifier of the package/namespace that registered a group of elements.
pub struct GroupKey(pub String);

impl GroupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentElementDefinition {
    pub group_key: GroupKey,
    pub element_key: ElementKey,
    /// Raw label; may be an `LLL:` translation reference.
    pub label: String,
    pub icon_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogGroup {
    pub key: GroupKey,
    pub elements: Vec<ContentElementDefinition>,
}

impl CatalogGroup {
    pub fn new(key: impl Into<GroupKey>) -> Self {
        Self {
            key: key.into(),
            elements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Grouped catalog of content element definitions.
///
/// Group order and element order are the iteration order everything
/// downstream renders in; nothing here sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub groups: Vec<CatalogGroup>,
}

impl Catalog {
    /// Appends an element, creating its group at the end when it is new.
    pub fn push(&mut self, definition: ContentElementDefinition) {
        match self
            .groups
            .iter_mut()
            .find(|group| group.key == definition.group_key)
        {
            Some(group) => group.elements.push(definition),
            None => {
                let mut group = CatalogGroup::new(definition.group_key.clone());
                group.elements.push(definition);
                self.groups.push(group);
            }
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = &ContentElementDefinition> {
        self.groups.iter().flat_map(|group| group.elements.iter())
    }

    pub fn find(&self, key: &str) -> Option<&ContentElementDefinition> {
        self.elements().find(|element| element.element_key.as_str() == key)
    }

    pub fn element_count(&self) -> usize {
        self.groups.iter().map(|group| group.elements.len()).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
/// Catalog file as stored on disk.
pub struct CatalogDocument {
    pub schema_version: String,
    #[serde(default)]
    pub default_icon: Option<String>,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupEntry {
    pub key: GroupKey,
    #[serde(default)]
    pub elements: Vec<ElementEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementEntry {
    pub key: ElementKey,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

impl CatalogDocument {
    /// Flattens the nested file layout into a `Catalog`, stamping each element
    /// with the key of the group that declared it.
    pub fn to_catalog(&self) -> Catalog {
        let groups = self
            .groups
            .iter()
            .map(|entry| CatalogGroup {
                key: entry.key.clone(),
                elements: entry
                    .elements
                    .iter()
                    .map(|element| ContentElementDefinition {
                        group_key: entry.key.clone(),
                        element_key: element.key.clone(),
                        label: element.label.clone(),
                        icon_ref: element.icon.clone(),
                    })
                    .collect(),
            })
            .collect();
        Catalog { groups }
    }
}

pub fn load_catalog_from_path(path: &Path) -> Result<CatalogDocument> {
    let file = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(group: &str, key: &str) -> ContentElementDefinition {
        ContentElementDefinition {
            group_key: group.into(),
            element_key: key.into(),
            label: key.to_uppercase(),
            icon_ref: format!("icons/{key}.svg"),
        }
    }

    #[test]
    fn push_keeps_first_seen_group_order() {
        let mut catalog = Catalog::default();
        catalog.push(definition("news", "news_list"));
        catalog.push(definition("core", "text"));
        catalog.push(definition("news", "news_detail"));

        let keys: Vec<_> = catalog.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["news", "core"]);
        assert_eq!(catalog.groups[0].elements.len(), 2);
        assert_eq!(catalog.element_count(), 3);
    }

    #[test]
    fn document_flattens_into_catalog_with_group_keys() {
        let document: CatalogDocument = serde_json::from_value(serde_json::json!({
            "schema_version": "content_catalog_v1",
            "groups": [
                {"key": "core", "elements": [{"key": "text", "label": "Text", "icon": "t.svg"}]},
                {"key": "empty"}
            ]
        }))
        .unwrap();

        let catalog = document.to_catalog();
        assert_eq!(catalog.groups.len(), 2);
        assert!(catalog.groups[1].is_empty());
        let text = catalog.find("text").expect("text present");
        assert_eq!(text.group_key.as_str(), "core");
        assert_eq!(text.icon_ref, "t.svg");
    }
}
