use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "shopgrid",
    version,
    about = "A terminal storefront viewer rendering a product catalog as a card grid",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Catalog endpoint URL.
    #[arg(long, value_name = "URL", env = "SHOPGRID_CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Currency symbol shown before prices.
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Columns subtracted from each card's half of the viewport.
    #[arg(long, value_name = "N")]
    pub card_spacing: Option<u16>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,
}
