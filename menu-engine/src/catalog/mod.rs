//! Catalog Loader
//!
//! Fetches the rows a customization dialog needs, builds the dependency
//! graph, and hands out an immutable [`ProductCatalog`] snapshot per
//! menu item.

mod loader;
pub mod seed;
pub mod store;

pub use loader::{CatalogError, CatalogLoader, ProductCatalog};
pub use store::{CatalogStore, MemoryCatalog, StoreError};
