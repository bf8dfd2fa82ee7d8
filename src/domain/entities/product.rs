//! Catalog product entity.

use serde::{Deserialize, Serialize};

/// Glyph shown in front of a product's rating.
pub const RATING_GLYPH: &str = "⭐";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl ProductId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Aggregated customer rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score.
    pub rate: f64,
    /// Number of ratings. Not rendered.
    pub count: u64,
}

impl Rating {
    #[must_use]
    pub const fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }
}

/// A product as returned by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    title: Option<String>,
    description: String,
    price: f64,
    category: String,
    rating: Rating,
    image: String,
}

impl Product {
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            title: None,
            description: String::new(),
            price,
            category: category.into(),
            rating: Rating::default(),
            image: String::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Stable render key for this product.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the title when it is a non-empty string, otherwise the name.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }

    #[must_use]
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }

    /// Formats the price with exactly two fraction digits behind `currency`.
    ///
    /// Rounds on the exact binary value; exact half-cent ties round away from zero.
    #[must_use]
    pub fn price_text(&self, currency: &str) -> String {
        format!("{currency}{:.2}", round_half_cent_ties(self.price))
    }

    /// Formats the raw rating value, unrounded.
    #[must_use]
    pub fn rating_text(&self) -> String {
        format!("{RATING_GLYPH} {}", self.rating.rate)
    }
}

/// Resolves values sitting exactly on a half cent away from zero.
///
/// Every other value is left for `{:.2}`, which already rounds the exact value.
#[allow(clippy::float_cmp)]
fn round_half_cent_ties(value: f64) -> f64 {
    // Only odd multiples of 1/8 end in a 5 at the third decimal.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}
