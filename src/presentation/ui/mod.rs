//! UI screens.

mod app;
mod product_grid_screen;

pub use app::App;
pub use product_grid_screen::{LoadStatus, ProductGridScreen};
