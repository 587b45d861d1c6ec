mod dashboard;
mod export;

use std::path::{Path, PathBuf};

use brandlens_core::{AppConfig, ReportRegistry};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brandlens")]
#[command(about = "Brand analysis reports, one per analysis model")]
struct Cli {
    /// Catalog YAML to load instead of the configured or embedded one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the analysis models in the catalog.
    Models,
    /// Print the dashboard for a model.
    Show {
        /// Model id; defaults to the configured default model.
        #[arg(long)]
        model: Option<String>,
        /// Print the derived views as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write a model's report as a JSON document for export.
    Export {
        #[arg(long)]
        model: Option<String>,
        /// Output directory; defaults to `BRANDLENS_EXPORT_DIR`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate the catalog and report percentage anomalies.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = brandlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = load_registry(&config, cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::Models) => {
            dashboard::run_models(&registry, &config);
            Ok(())
        }
        Some(Commands::Show { model, json }) => {
            dashboard::run_show(&registry, &config, model.as_deref(), json)
        }
        Some(Commands::Export { model, out }) => {
            export::run_export(&registry, &config, model.as_deref(), out).await
        }
        Some(Commands::Check) => dashboard::run_check(&registry, &config),
        None => dashboard::run_show(&registry, &config, None, false),
    }
}

/// Load the catalog from `--catalog`, then `BRANDLENS_CATALOG_PATH`, then the
/// embedded reference catalog.
fn load_registry(
    config: &AppConfig,
    catalog_flag: Option<&Path>,
) -> anyhow::Result<ReportRegistry> {
    let catalog = match catalog_flag.or(config.catalog_path.as_deref()) {
        Some(path) => brandlens_core::load_catalog(path)?,
        None => brandlens_core::default_catalog()?,
    };
    let registry = ReportRegistry::from_catalog(catalog)?;
    tracing::info!(models = registry.len(), env = %config.env, "catalog loaded");
    Ok(registry)
}
