//! Catalog HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::dto::ProductResponse;
use crate::domain::entities::Product;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogPort;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";
const USER_AGENT: &str = concat!("shopgrid/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP adapter for the product catalog endpoint.
pub struct CatalogClient {
    client: Client,
    url: String,
}

impl CatalogClient {
    /// Creates client for the default endpoint.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_url(DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT)
    }

    /// Creates client for a custom endpoint.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Returns the endpoint this client reads from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogPort for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(url = %self.url, "Requesting product catalog");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            debug!(error = %e, "Catalog request failed");
            if e.is_timeout() {
                CatalogError::network("request timed out")
            } else if e.is_connect() {
                CatalogError::network("failed to connect to catalog endpoint")
            } else {
                CatalogError::network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            debug!(%status, "Catalog endpoint rejected request");
            return Err(CatalogError::status(status.as_u16()));
        }

        let records: Vec<ProductResponse> = response.json().await.map_err(|e| {
            debug!(error = %e, "Catalog body unreadable");
            if e.is_decode() {
                CatalogError::decode(e.to_string())
            } else {
                CatalogError::network(e.to_string())
            }
        })?;

        debug!(count = records.len(), "Catalog response decoded");

        Ok(records.into_iter().map(Product::from).collect())
    }
}
