//! Catalog loading use case.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::CatalogLoadOutcome;
use crate::domain::ports::CatalogPort;

/// Loads the product catalog once and reports the outcome.
#[derive(Clone)]
pub struct LoadCatalogUseCase {
    catalog_port: Arc<dyn CatalogPort>,
}

impl LoadCatalogUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(catalog_port: Arc<dyn CatalogPort>) -> Self {
        Self { catalog_port }
    }

    /// Performs a single catalog fetch.
    ///
    /// Failures are logged and returned as [`CatalogLoadOutcome::Failed`];
    /// they never propagate as errors.
    pub async fn execute(&self) -> CatalogLoadOutcome {
        debug!("Fetching product catalog");

        match self.catalog_port.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Product catalog loaded");
                CatalogLoadOutcome::Loaded(products)
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                CatalogLoadOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Product;
    use crate::domain::errors::CatalogError;
    use crate::domain::ports::mocks::MockCatalogPort;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_loaded_preserves_order() {
        let products = vec![
            Product::new(3, "c", 1.0, "x"),
            Product::new(1, "a", 2.0, "y"),
            Product::new(2, "b", 3.0, "z"),
        ];
        let port = Arc::new(MockCatalogPort::with_products(products));
        let use_case = LoadCatalogUseCase::new(port);

        let outcome = use_case.execute().await;

        let keys: Vec<String> = outcome
            .products()
            .unwrap()
            .iter()
            .map(Product::key)
            .collect();
        assert_eq!(keys, ["3", "1", "2"]);
    }

    #[tokio::test]
    async fn test_failure_is_contained() {
        let port = Arc::new(MockCatalogPort::failing());
        let use_case = LoadCatalogUseCase::new(port);

        let outcome = use_case.execute().await;

        assert!(!outcome.is_loaded());
        assert!(matches!(outcome.error(), Some(CatalogError::Network { .. })));
    }

    #[tokio::test]
    async fn test_single_port_call_per_execute() {
        let port = MockCatalogPort::with_products(Vec::new());
        let calls = port.calls();
        let use_case = LoadCatalogUseCase::new(Arc::new(port));

        let outcome = use_case.execute().await;

        assert_eq!(outcome.products().map(<[Product]>::len), Some(0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
