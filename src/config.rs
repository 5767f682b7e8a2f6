//! Selector settings: fallback icon, empty-option label and field name,
//! with `CONTENT_SELECTOR_*` environment overrides.

use serde::Deserialize;
use std::env;

pub const DEFAULT_ICON: &str = "EXT:content_selector/Resources/Public/Icons/Plugin.svg";
pub const DEFAULT_EMPTY_LABEL: &str =
    "LLL:EXT:content_selector/Resources/Private/Language/locallang.xlf:no_selection";
pub const DEFAULT_FIELD_NAME: &str = "data[tt_content][tx_fed_fcefile]";

const ENV_DEFAULT_ICON: &str = "CONTENT_SELECTOR_DEFAULT_ICON";
const ENV_EMPTY_LABEL: &str = "CONTENT_SELECTOR_EMPTY_LABEL";
const ENV_FIELD_NAME: &str = "CONTENT_SELECTOR_FIELD_NAME";

/// Presentation settings for one selector field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Explicit fallback icon. When unset, the catalog's own default icon is
    /// used, then `DEFAULT_ICON`.
    pub default_icon: Option<String>,
    pub empty_label: String,
    pub field_name: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_icon: None,
            empty_label: DEFAULT_EMPTY_LABEL.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

impl SelectorConfig {
    /// Defaults overlaid with the `CONTENT_SELECTOR_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(env_non_empty)
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(icon) = lookup(ENV_DEFAULT_ICON) {
            self.default_icon = Some(icon);
        }
        if let Some(label) = lookup(ENV_EMPTY_LABEL) {
            self.empty_label = label;
        }
        if let Some(name) = lookup(ENV_FIELD_NAME) {
            self.field_name = name;
        }
        self
    }

    /// Picks the fallback icon: explicit setting, then the catalog's, then
    /// the built-in default.
    pub fn fallback_icon<'a>(&'a self, catalog_default: Option<&'a str>) -> &'a str {
        self.default_icon
            .as_deref()
            .or(catalog_default)
            .unwrap_or(DEFAULT_ICON)
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn overrides_replace_defaults() {
        let vars: BTreeMap<&str, &str> = BTreeMap::from([
            (ENV_DEFAULT_ICON, "custom.svg"),
            (ENV_FIELD_NAME, "data[tt_content][42][tx_fed_fcefile]"),
        ]);
        let config = SelectorConfig::default()
            .with_overrides(|name| vars.get(name).map(|value| value.to_string()));

        assert_eq!(config.default_icon.as_deref(), Some("custom.svg"));
        assert_eq!(config.field_name, "data[tt_content][42][tx_fed_fcefile]");
        assert_eq!(config.empty_label, DEFAULT_EMPTY_LABEL);
    }

    #[test]
    fn fallback_icon_precedence() {
        let mut config = SelectorConfig::default();
        assert_eq!(config.fallback_icon(None), DEFAULT_ICON);
        assert_eq!(config.fallback_icon(Some("catalog.svg")), "catalog.svg");
        config.default_icon = Some("explicit.svg".to_string());
        assert_eq!(config.fallback_icon(Some("catalog.svg")), "explicit.svg");
    }

    #[test]
    fn deserializes_partial_config() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{"field_name": "custom"}"#).unwrap();
        assert_eq!(config.field_name, "custom");
        assert_eq!(config.empty_label, DEFAULT_EMPTY_LABEL);
        assert_eq!(config.default_icon, None);
    }
}
