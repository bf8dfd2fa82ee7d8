//! Catalog port definition.

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::domain::errors::CatalogError;

/// Port for reading the remote product catalog.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetches the full catalog, preserving the order returned by the endpoint.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
