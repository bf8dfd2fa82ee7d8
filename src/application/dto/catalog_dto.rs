//! Catalog load DTOs.

use crate::domain::entities::Product;
use crate::domain::errors::CatalogError;

/// Result of one catalog load.
#[derive(Debug)]
pub enum CatalogLoadOutcome {
    /// Full catalog, in endpoint order.
    Loaded(Vec<Product>),
    /// Fetch or decode failed.
    Failed(CatalogError),
}

impl CatalogLoadOutcome {
    /// Returns whether the load succeeded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns loaded products, if any.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Loaded(products) => Some(products),
            Self::Failed(_) => None,
        }
    }

    /// Returns failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&CatalogError> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}
