//! Application configuration.

use super::args::CliArgs;
use crate::infrastructure::catalog::DEFAULT_CATALOG_URL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_NAME: &str = "shopgrid";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_tracing_level().as_str().to_lowercase())
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Catalog endpoint configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Grid configuration.
    #[serde(default)]
    pub grid: GridConfig,
}

/// Catalog endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint returning the JSON product array.
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CatalogConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Symbol printed in front of every price.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Columns subtracted from half the viewport width for each card.
    #[serde(default = "default_card_spacing")]
    pub card_spacing: u16,

    /// How long a pressed card stays highlighted, in milliseconds.
    #[serde(default = "default_press_feedback_ms")]
    pub press_feedback_ms: u64,
}

impl GridConfig {
    #[must_use]
    pub const fn press_feedback(&self) -> Duration {
        Duration::from_millis(self.press_feedback_ms)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            card_spacing: default_card_spacing(),
            press_feedback_ms: default_press_feedback_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_card_spacing() -> u16 {
    1
}

fn default_press_feedback_ms() -> u64 {
    150
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(url) = args.catalog_url {
            self.catalog.url = url;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.catalog.timeout_secs = timeout_secs;
        }
        if let Some(currency) = args.currency {
            self.grid.currency_symbol = currency;
        }
        if let Some(card_spacing) = args.card_spacing {
            self.grid.card_spacing = card_spacing;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("shopgrid.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            catalog: CatalogConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [catalog]
            url = "http://localhost:8080/products"

            [grid]
            currency_symbol = "€"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.catalog.url, "http://localhost:8080/products");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.grid.currency_symbol, "€");
        assert_eq!(config.grid.card_spacing, 1);
        assert!(config.mouse);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.timeout(), Duration::from_secs(30));
        assert_eq!(config.grid.currency_symbol, "$");
        assert_eq!(config.grid.press_feedback(), Duration::from_millis(150));
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            catalog_url: Some("http://example.test/items".to_string()),
            currency: Some("£".to_string()),
            card_spacing: Some(3),
            log_level: Some(LogLevel::Trace),
            ..CliArgs::default()
        };

        config.merge_with_args(args);

        assert_eq!(config.catalog.url, "http://example.test/items");
        assert_eq!(config.grid.currency_symbol, "£");
        assert_eq!(config.grid.card_spacing, 3);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.catalog.timeout_secs, 30);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Info.to_string(), "info");
    }
}
