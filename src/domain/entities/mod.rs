//! Domain entity definitions.

mod product;

pub use product::{Product, ProductId, Rating};
