//! Catalog fetch error types.

use thiserror::Error;

/// Failure while fetching or decoding the product catalog.
///
/// All variants belong to the same class: the catalog could not be loaded.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("network error while fetching catalog: {message}")]
    Network { message: String },

    #[error("catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode catalog response: {message}")]
    Decode { message: String },

    #[error("unexpected catalog error: {message}")]
    Unexpected { message: String },
}

impl CatalogError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates non-success status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
