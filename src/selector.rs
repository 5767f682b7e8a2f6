//! Entry point for rendering the content element selection field.
//!
//! `ContentSelector` receives its collaborators explicitly: the catalog
//! provider, the container lookup, the layout resolver and the localizer.
//! Missing restriction data (no parent, unknown container, no grid) degrades
//! to "no restriction". Collaborator failures are returned as errors and abort
//! the render.

use crate::catalog::CatalogProvider;
use crate::config::SelectorConfig;
use crate::layout::{ContainerLookup, LayoutResolver};
use crate::localize::Localizer;
use crate::options::{self, OptionSet};
use crate::render;
use crate::restrictions::{self, RestrictionLists};
use anyhow::{Context, Result};

pub struct ContentSelector<'a> {
    catalog: &'a dyn CatalogProvider,
    containers: &'a dyn ContainerLookup,
    layouts: &'a dyn LayoutResolver,
    localizer: &'a dyn Localizer,
    config: SelectorConfig,
}

impl<'a> ContentSelector<'a> {
    pub fn new(
        catalog: &'a dyn CatalogProvider,
        containers: &'a dyn ContainerLookup,
        layouts: &'a dyn LayoutResolver,
        localizer: &'a dyn Localizer,
    ) -> Self {
        Self {
            catalog,
            containers,
            layouts,
            localizer,
            config: SelectorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Collects the allow/deny lists of the container with id `parent`.
    pub fn resolve_restrictions(&self, parent: Option<&str>) -> Result<RestrictionLists> {
        let Some(parent) = parent.map(str::trim).filter(|id| !id.is_empty()) else {
            return Ok(RestrictionLists::none());
        };

        let Some(container) = self
            .containers
            .container(parent)
            .with_context(|| format!("looking up container {parent}"))?
        else {
            tracing::debug!(
                target: "content_selector::selector",
                parent,
                "container not found; no restriction"
            );
            return Ok(RestrictionLists::none());
        };

        let Some(tree) = self
            .layouts
            .column_tree(&container)
            .with_context(|| format!("resolving grid of container {}", container.id))?
        else {
            tracing::debug!(
                target: "content_selector::selector",
                parent,
                "container declares no grid; no restriction"
            );
            return Ok(RestrictionLists::none());
        };

        Ok(restrictions::extract(&tree))
    }

    /// Builds the option set for a field currently holding `current_value`,
    /// placed into the container `parent` (if any).
    pub fn render_field(&self, current_value: &str, parent: Option<&str>) -> Result<OptionSet> {
        let restrictions = self.resolve_restrictions(parent)?;
        let catalog = self.catalog.catalog().context("loading content catalog")?;

        let selected_icon = options::selected_icon(catalog, current_value)
            .unwrap_or_else(|| self.config.fallback_icon(self.catalog.default_icon()))
            .to_string();

        let filtered = restrictions::filter(catalog, &restrictions);
        tracing::debug!(
            target: "content_selector::selector",
            offered = filtered.element_count(),
            total = catalog.element_count(),
            "catalog filtered"
        );

        Ok(options::build(
            &filtered,
            current_value,
            &self.config.empty_label,
            selected_icon,
            self.localizer,
        ))
    }

    /// Renders the field as HTML using the configured field name.
    pub fn render_html(&self, current_value: &str, parent: Option<&str>) -> Result<String> {
        let options = self.render_field(current_value, parent)?;
        Ok(render::render_select(&options, &self.config.field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ContentElementDefinition, StaticCatalogProvider};
    use crate::layout::{
        ColumnTree, ColumnVariables, ContainerRecord, GridColumn, GridRow, LayoutStore,
    };
    use crate::localize::IdentityLocalizer;
    use anyhow::bail;

    struct FailingLookup;

    impl ContainerLookup for FailingLookup {
        fn container(&self, _id: &str) -> Result<Option<ContainerRecord>> {
            bail!("record storage unavailable")
        }
    }

    impl LayoutResolver for FailingLookup {
        fn column_tree(&self, _container: &ContainerRecord) -> Result<Option<ColumnTree>> {
            bail!("grid parser unavailable")
        }
    }

    fn catalog() -> StaticCatalogProvider {
        let mut catalog = Catalog::default();
        for (group, key) in [("core", "text"), ("core", "image"), ("news", "news_list")] {
            catalog.push(ContentElementDefinition {
                group_key: group.into(),
                element_key: key.into(),
                label: key.to_string(),
                icon_ref: format!("icons/{key}.svg"),
            });
        }
        StaticCatalogProvider::new(catalog)
    }

    fn store() -> LayoutStore {
        let main = GridColumn {
            name: "main".to_string(),
            variables: ColumnVariables {
                allowed_content_types: Some("text".to_string()),
                denied_content_types: None,
            },
        };
        LayoutStore::default().with_container("10", Some("grid")).with_layout(
            "grid",
            ColumnTree {
                rows: vec![GridRow {
                    columns: vec![main],
                }],
            },
        )
    }

    #[test]
    fn absent_parent_skips_lookups() -> Result<()> {
        let catalog = catalog();
        let selector =
            ContentSelector::new(&catalog, &FailingLookup, &FailingLookup, &IdentityLocalizer);
        for parent in [None, Some(""), Some("  ")] {
            let set = selector.render_field("", parent)?;
            assert_eq!(set.options().count(), 3);
        }
        Ok(())
    }

    #[test]
    fn lookup_failure_aborts_render() {
        let catalog = catalog();
        let selector =
            ContentSelector::new(&catalog, &FailingLookup, &FailingLookup, &IdentityLocalizer);
        let err = selector.render_field("", Some("10")).unwrap_err();
        assert!(format!("{err:#}").contains("record storage unavailable"));
    }

    #[test]
    fn layout_failure_aborts_render() {
        let catalog = catalog();
        let containers = store();
        let selector =
            ContentSelector::new(&catalog, &containers, &FailingLookup, &IdentityLocalizer);
        let err = selector.render_field("", Some("10")).unwrap_err();
        assert!(format!("{err:#}").contains("grid parser unavailable"));
    }

    #[test]
    fn selected_icon_uses_unfiltered_catalog() -> Result<()> {
        let catalog = catalog();
        let store = store();
        let selector = ContentSelector::new(&catalog, &store, &store, &IdentityLocalizer);

        let set = selector.render_field("image", Some("10"))?;
        assert!(set.selected().is_none());
        assert_eq!(set.selected_icon, "icons/image.svg");
        Ok(())
    }

    #[test]
    fn html_uses_configured_field_name() -> Result<()> {
        let catalog = catalog();
        let store = store();
        let config = SelectorConfig {
            field_name: "data[tt_content][5][tx_fed_fcefile]".to_string(),
            ..SelectorConfig::default()
        };
        let selector =
            ContentSelector::new(&catalog, &store, &store, &IdentityLocalizer).with_config(config);

        let html = selector.render_html("text", Some("10"))?;
        assert!(html.contains("name=\"data[tt_content][5][tx_fed_fcefile]\""));
        assert!(html.contains("value=\"text\" selected=\"selected\""));
        assert!(!html.contains("value=\"image\""));
        Ok(())
    }
}
