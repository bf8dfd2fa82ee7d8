//! Infrastructure layer with external service adapters.

/// Remote catalog client.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::CatalogClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
