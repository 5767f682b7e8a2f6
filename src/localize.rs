//! Translation of `LLL:` label references into display strings.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Labels starting with this prefix are translation references.
pub const LABEL_REFERENCE_PREFIX: &str = "LLL:";

pub fn is_label_reference(label: &str) -> bool {
    label.starts_with(LABEL_REFERENCE_PREFIX)
}

/// Turns translation references into display strings.
pub trait Localizer {
    fn resolve(&self, reference: &str) -> String;

    /// Resolves `label` only when it is a translation reference.
    fn display_label(&self, label: &str) -> String {
        if is_label_reference(label) {
            self.resolve(label)
        } else {
            label.to_string()
        }
    }
}

/// Returns every reference unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn resolve(&self, reference: &str) -> String {
        reference.to_string()
    }
}

/// Label table keyed by full reference string. Unknown references resolve to
/// themselves so a missing translation still shows something.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    labels: BTreeMap<String, String>,
}

impl MapLocalizer {
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening label file {}", path.display()))?;
        let labels = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing label file {}", path.display()))?;
        Ok(Self { labels })
    }

    pub fn insert(&mut self, reference: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(reference.into(), label.into());
    }
}

impl Localizer for MapLocalizer {
    fn resolve(&self, reference: &str) -> String {
        match self.labels.get(reference) {
            Some(label) => label.clone(),
            None => {
                tracing::debug!(target: "content_selector::localize", reference, "no translation");
                reference.to_string()
            }
        }
    }
}
