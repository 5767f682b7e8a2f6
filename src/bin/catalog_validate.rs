//! Validate catalog or layout-store documents.
//!
//! Usage:
//!   catalog-validate --mode catalog --file catalogs/content_elements.json
//!   catalog-validate --mode layouts < layouts.json

use anyhow::{Context, Result};
use clap::Parser;
use content_selector::{CatalogDocument, CatalogIndex, DocumentKind, LayoutStore, SchemaValidator};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate content catalogs and layout stores")]
struct Cli {
    /// Document kind: catalog or layouts.
    #[arg(long, value_parser = ["catalog", "layouts"])]
    mode: String,
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Validate against this schema file instead of the bundled one.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
    }
    let value: Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    Ok(value)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let kind = DocumentKind::try_from(cli.mode.as_str())?;
    let input = read_input(cli.file.as_ref())?;

    let validator = match &cli.schema {
        Some(path) => SchemaValidator::load(path)?,
        None => SchemaValidator::bundled(kind)?,
    };
    validator.validate(&input)?;

    match kind {
        DocumentKind::Catalog => {
            let document: CatalogDocument =
                serde_json::from_value(input).context("decoding catalog document")?;
            let index = CatalogIndex::from_document(&document)?;
            tracing::info!(
                target: "content_selector::validate",
                groups = index.catalog().groups.len(),
                elements = index.catalog().element_count(),
                "catalog valid"
            );
        }
        DocumentKind::Layouts => {
            let store: LayoutStore =
                serde_json::from_value(input).context("decoding layout store")?;
            tracing::info!(
                target: "content_selector::validate",
                containers = store.containers.len(),
                layouts = store.layouts.len(),
                "layout store valid"
            );
        }
    }
    println!("ok");
    Ok(())
}
