use serde::Deserialize;

use crate::domain::entities::{Product, Rating};
use crate::domain::serde_utils::null_as_default;

/// Catalog endpoint product record.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    /// Unique product identifier.
    pub id: u64,
    /// Product name; some catalogs only send `title`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Display title, preferred over `name` when non-empty.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Unit price.
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: RatingResponse,
    /// Thumbnail URI.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Catalog endpoint rating record.
#[derive(Debug, Default, Deserialize)]
pub struct RatingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

impl From<ProductResponse> for Product {
    fn from(response: ProductResponse) -> Self {
        let mut product = Self::new(
            response.id,
            response.name,
            response.price,
            response.category,
        )
        .with_description(response.description)
        .with_rating(Rating::new(response.rating.rate, response.rating.count))
        .with_image(response.image);

        if let Some(title) = response.title {
            product = product.with_title(title);
        }

        product
    }
}
