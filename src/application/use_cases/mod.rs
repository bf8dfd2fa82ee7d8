//! Use case implementations.

mod load_catalog_use_case;

pub use load_catalog_use_case::LoadCatalogUseCase;
