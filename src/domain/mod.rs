//! Domain layer with core catalog entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde helpers.
pub mod serde_utils;

pub use entities::{Product, ProductId, Rating};
pub use errors::CatalogError;
pub use ports::CatalogPort;
