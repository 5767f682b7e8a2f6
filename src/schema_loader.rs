//! JSON Schema validation for catalog and layout-store documents.
//!
//! The bundled schemas under `schema/` are compiled on demand; callers may
//! also load a schema from disk. Validation failures are reported with every
//! schema error joined into one message.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const CATALOG_SCHEMA: &str = include_str!("../schema/content_catalog.schema.json");
const LAYOUT_STORE_SCHEMA: &str = include_str!("../schema/layout_store.schema.json");

/// Which bundled schema a document is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Catalog,
    Layouts,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Catalog => "catalog",
            DocumentKind::Layouts => "layouts",
        }
    }

    fn bundled_schema(&self) -> &'static str {
        match self {
            DocumentKind::Catalog => CATALOG_SCHEMA,
            DocumentKind::Layouts => LAYOUT_STORE_SCHEMA,
        }
    }
}

impl TryFrom<&str> for DocumentKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "catalog" => Ok(DocumentKind::Catalog),
            "layouts" => Ok(DocumentKind::Layouts),
            other => bail!("Unknown document kind: {other}"),
        }
    }
}

pub struct SchemaValidator {
    name: String,
    compiled: JSONSchema,
}

impl SchemaValidator {
    pub fn bundled(kind: DocumentKind) -> Result<Self> {
        let schema: Value = serde_json::from_str(kind.bundled_schema())
            .with_context(|| format!("parsing bundled {} schema", kind.as_str()))?;
        Self::compile(format!("bundled {} schema", kind.as_str()), &schema)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let schema: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(path.display().to_string(), &schema)
    }

    fn compile(name: String, schema: &Value) -> Result<Self> {
        let compiled =
            JSONSchema::compile(schema).map_err(|err| anyhow!("compiling {name}: {err}"))?;
        Ok(Self { name, compiled })
    }

    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{} (at {})", err, err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("document failed {} validation:\n{}", self.name, details);
        }
        Ok(())
    }
}

/// Reads a JSON file and checks it against the bundled schema for `kind`.
pub fn validate_file(path: &Path, kind: DocumentKind) -> Result<Value> {
    let value: Value = serde_json::from_reader(
        File::open(path).with_context(|| format!("opening {}", path.display()))?,
    )
    .with_context(|| format!("parsing {}", path.display()))?;
    SchemaValidator::bundled(kind)?
        .validate(&value)
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(value)
}
