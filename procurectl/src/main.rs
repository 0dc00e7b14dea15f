use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use procuredata_config::{Config, ConfigLoader, ConfigLoaderOptions};
use procuredata_core::{
    CatalogService, PostgrestStore, RemoteStore, demo,
};
use procuredata_model::FilterState;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;

use cli::{Cli, Command, SourceArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,procuredata_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let load = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
    })
    .load()
    .context("failed to load configuration")?;

    if load.config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
    let config = load.config;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Listings { source, filters } => {
            let view = load_view(&config, &source, &filters.to_filter()).await?;
            output::print_listings(&mut stdout, &view, source.json)
                .context("failed to write listings")?;
        }
        Command::Categories { source } => {
            let view =
                load_view(&config, &source, &FilterState::default()).await?;
            output::print_categories(&mut stdout, &view, source.json)
                .context("failed to write categories")?;
        }
    }

    Ok(())
}

async fn load_view(
    config: &Config,
    source: &SourceArgs,
    filter: &FilterState,
) -> Result<procuredata_core::CatalogView> {
    let store = build_store(config, source.demo)?;
    let service = CatalogService::new(store, config.catalog_settings());
    let view = service
        .load_view(&source.scope(), filter)
        .await
        .context("failed to read catalog listings")?;
    info!(
        source = %view.source,
        total = view.total,
        shown = view.listings.len(),
        "catalog view ready"
    );
    Ok(view)
}

fn build_store(config: &Config, demo_mode: bool) -> Result<Arc<dyn RemoteStore>> {
    if demo_mode {
        info!("using built-in demo marketplace");
        return Ok(Arc::new(demo::seeded_store()));
    }

    let url = config.require_store_url()?;
    let store = PostgrestStore::new(
        url.as_str(),
        config.store.api_key.clone(),
        config.store.timeout,
    )
    .context("failed to build store client")?;
    Ok(Arc::new(store))
}
