//! Render-ready option set for the content element selector.

use crate::catalog::Catalog;
use crate::localize::Localizer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyOption {
    pub label: String,
}

impl EmptyOption {
    /// The empty option always stores the empty string.
    pub fn value(&self) -> &'static str {
        ""
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub icon_ref: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    pub empty_option: EmptyOption,
    pub groups: Vec<OptionGroup>,
    /// Icon shown next to the select for the current value.
    pub selected_icon: String,
}

impl OptionSet {
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.groups.iter().flat_map(|group| group.options.iter())
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.options().find(|option| option.selected)
    }

    /// Same option set without groups that ended up with no options.
    pub fn without_empty_groups(mut self) -> Self {
        self.groups.retain(|group| !group.options.is_empty());
        self
    }
}

/// Builds the option set for `filtered`, marking `current_value` selected.
///
/// `selected_icon` is computed by the caller (see [`selected_icon`]) because
/// it is looked up in the unfiltered catalog.
pub fn build(
    filtered: &Catalog,
    current_value: &str,
    empty_label: &str,
    selected_icon: String,
    localizer: &dyn Localizer,
) -> OptionSet {
    let groups = filtered
        .groups
        .iter()
        .map(|group| OptionGroup {
            label: group.key.to_string(),
            options: group
                .elements
                .iter()
                .map(|element| SelectOption {
                    value: element.element_key.to_string(),
                    label: localizer.display_label(&element.label),
                    icon_ref: element.icon_ref.clone(),
                    selected: element.element_key.as_str() == current_value,
                })
                .collect(),
        })
        .collect();

    OptionSet {
        empty_option: EmptyOption {
            label: localizer.display_label(empty_label),
        },
        groups,
        selected_icon,
    }
}

/// Icon of the element whose key equals `current_value`, if any.
pub fn selected_icon<'a>(catalog: &'a Catalog, current_value: &str) -> Option<&'a str> {
    catalog
        .find(current_value)
        .map(|element| element.icon_ref.as_str())
}
