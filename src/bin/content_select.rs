//! Render the content element selection field from catalog and layout files.
//!
//! Usage:
//!   content-select --catalog catalogs/content_elements.json
//!   content-select --catalog catalogs/content_elements.json --layouts layouts.json \
//!       --parent 42 --value text --format json

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use content_selector::{
    ContentSelector, IdentityLocalizer, JsonCatalogProvider, LayoutStore, Localizer, MapLocalizer,
    SelectorConfig,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "content-select")]
#[command(about = "Render the content element type selector for a field")]
struct Cli {
    /// Content element catalog file.
    #[arg(long)]
    catalog: PathBuf,
    /// Container and grid layout store; required with --parent.
    #[arg(long)]
    layouts: Option<PathBuf>,
    /// Label file mapping LLL: references to display strings.
    #[arg(long)]
    labels: Option<PathBuf>,
    /// Value currently stored in the field.
    #[arg(long, default_value = "")]
    value: String,
    /// Id of the container the element is placed into.
    #[arg(long)]
    parent: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
    /// Drop groups left without options.
    #[arg(long)]
    prune_empty_groups: bool,
    /// Icon shown when the value matches no element.
    #[arg(long)]
    default_icon: Option<String>,
    /// Name attribute of the rendered select.
    #[arg(long)]
    field_name: Option<String>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.parent.is_some() && cli.layouts.is_none() {
        bail!("--parent requires --layouts");
    }

    let mut config = SelectorConfig::from_env();
    if let Some(icon) = cli.default_icon {
        config.default_icon = Some(icon);
    }
    if let Some(name) = cli.field_name {
        config.field_name = name;
    }

    let catalog = JsonCatalogProvider::new(&cli.catalog);
    let store = match &cli.layouts {
        Some(path) => LayoutStore::load(path)?,
        None => LayoutStore::default(),
    };
    let localizer: Box<dyn Localizer> = match &cli.labels {
        Some(path) => Box::new(MapLocalizer::load(path)?),
        None => Box::new(IdentityLocalizer),
    };

    let selector =
        ContentSelector::new(&catalog, &store, &store, localizer.as_ref()).with_config(config);
    let mut options = selector.render_field(&cli.value, cli.parent.as_deref())?;
    if cli.prune_empty_groups {
        options = options.without_empty_groups();
    }

    match cli.format {
        OutputFormat::Html => println!(
            "{}",
            content_selector::render::render_select(&options, &selector.config().field_name)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
    }
    Ok(())
}
