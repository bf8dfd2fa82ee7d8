use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use shopgrid::application::LoadCatalogUseCase;
use shopgrid::infrastructure::{AppConfig, CatalogClient, CliArgs, StorageManager};
use shopgrid::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let mut config = match StorageManager::new() {
        Ok(storage) => storage.load_config(args.config.as_deref())?,
        Err(_) => AppConfig::default(),
    };
    config.merge_with_args(args);

    Ok(config)
}

fn create_app() -> Result<(App, bool)> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(
        version = shopgrid::VERSION,
        catalog_url = %config.catalog.url,
        "Starting shopgrid"
    );

    let catalog_client = Arc::new(CatalogClient::with_url(
        config.catalog.url.clone(),
        config.catalog.timeout(),
    )?);
    let load_catalog = LoadCatalogUseCase::new(catalog_client);

    Ok((App::new(load_catalog, config.grid), config.mouse))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (app, mouse) = create_app()?;

    let mut terminal = ratatui::init();
    if mouse {
        crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal).await;

    if mouse {
        crossterm::execute!(std::io::stdout(), DisableMouseCapture)?;
    }
    ratatui::restore();

    result
}
