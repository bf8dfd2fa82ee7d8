//! Remote product catalog adapter.

mod client;
mod dto;

pub use client::{CatalogClient, DEFAULT_CATALOG_URL};
pub use dto::{ProductResponse, RatingResponse};
