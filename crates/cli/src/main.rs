//! Compendium converter entry point.
//!
//! Run with: `compendium --config compendium.toml --output Compendium.xml`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use compendium_content::{CompendiumAssembler, ConfigLoader, FileDocumentSource, render_document};
use compendium_core::Category;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable naming the config file when `--config` is absent.
const CONFIG_ENV: &str = "COMPENDIUM_CONFIG";
const DEFAULT_CONFIG: &str = "compendium.toml";

/// Convert rules-content documents into a single compendium
#[derive(Parser)]
#[command(name = "compendium")]
#[command(about = "Convert rules-content documents into a single compendium", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the run configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the compendium here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only convert these categories (repeatable); overrides the config
    #[arg(long = "only", value_name = "CATEGORY")]
    only: Vec<Category>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let config = ConfigLoader::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    let categories = if cli.only.is_empty() {
        config.categories.clone()
    } else {
        cli.only
    };
    tracing::info!("Config: {}", config_path.display());

    let source = FileDocumentSource::new(config.sources);
    let root = CompendiumAssembler::new(&source)
        .with_categories(categories)
        .assemble()?;
    let rendered = render_document(&root)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing compendium to {}", path.display()))?;
            tracing::info!("Compendium written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Setup logging to stderr; stdout is reserved for the compendium.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
