mod grid_layout;
mod product_card;
mod product_grid;
mod status_bar;

pub use grid_layout::{CARD_HEIGHT, COLUMNS, CardView, GridLayout, TITLE_MAX_LINES, wrap_lines};
pub use product_card::{ProductCard, ProductCardStyle};
pub use product_grid::{ProductGrid, ProductGridState};
pub use status_bar::{StatusBar, StatusLevel};
