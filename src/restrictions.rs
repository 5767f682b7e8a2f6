//! Allow/deny resolution for a container's grid.
//!
//! Restrictions are gathered from every column of every row of the
//! container's grid, not only from the column the new element lands in. This
//! container-wide breadth is observable behavior and is kept as is.

use crate::catalog::{Catalog, CatalogGroup};
use crate::layout::ColumnTree;
use std::collections::BTreeSet;

/// Normalized element keys a container restricts its content to, or excludes.
/// An empty set means that kind of restriction is not in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionLists {
    pub allow: BTreeSet<String>,
    pub deny: BTreeSet<String>,
}

impl RestrictionLists {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }

    /// Adds the tokens of a raw allow value after normalization.
    pub fn allow_raw(&mut self, raw: &str) {
        union_tokens(&mut self.allow, raw);
    }

    /// Adds the tokens of a raw deny value after normalization.
    pub fn deny_raw(&mut self, raw: &str) {
        union_tokens(&mut self.deny, raw);
    }

    /// Whether an element with this key survives filtering.
    ///
    /// A non-empty allow-list decides alone; the deny-list is only consulted
    /// when no allow-list is in effect.
    pub fn permits(&self, key: &str) -> bool {
        if !self.allow.is_empty() {
            self.allow.contains(key)
        } else {
            !self.deny.contains(key)
        }
    }
}

/// Maps namespaced identifiers (`vendor.ext:element`) onto the flat key
/// scheme of the catalog by turning `.` and `:` into `_`.
pub fn normalize_identifiers(raw: &str) -> String {
    raw.replace(['.', ':'], "_")
}

fn union_tokens(set: &mut BTreeSet<String>, raw: &str) {
    let normalized = normalize_identifiers(raw);
    if normalized.is_empty() {
        return;
    }
    set.extend(
        normalized
            .split(',')
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    );
}

/// Collects the union of allow and deny values over all columns of the tree.
pub fn extract(tree: &ColumnTree) -> RestrictionLists {
    let mut lists = RestrictionLists::none();
    for column in tree.columns() {
        let variables = &column.variables;
        lists.allow_raw(variables.allowed_content_types.as_deref().unwrap_or_default());
        lists.deny_raw(variables.denied_content_types.as_deref().unwrap_or_default());
    }
    tracing::debug!(
        target: "content_selector::restrictions",
        allow = lists.allow.len(),
        deny = lists.deny.len(),
        "restrictions extracted"
    );
    lists
}

/// Returns the subset of `catalog` the restrictions permit.
///
/// Groups are kept even when every element is removed.
pub fn filter(catalog: &Catalog, restrictions: &RestrictionLists) -> Catalog {
    if restrictions.is_empty() {
        return catalog.clone();
    }
    let groups = catalog
        .groups
        .iter()
        .map(|group| CatalogGroup {
            key: group.key.clone(),
            elements: group
                .elements
                .iter()
                .filter(|element| restrictions.permits(element.element_key.as_str()))
                .cloned()
                .collect(),
        })
        .collect();
    Catalog { groups }
}
