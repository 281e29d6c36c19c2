//! Menu customization engine
//!
//! Resolves hierarchical product customization for the storefront: which
//! attributes a menu item asks about, which choices reveal which further
//! attributes, what the running price is, and when a configuration is
//! complete enough to add to the cart.
//!
//! The flow per dialog:
//!
//! 1. [`CatalogLoader::load`] fetches the item's rows and builds an
//!    immutable [`ProductCatalog`] snapshot (graph validated acyclic).
//! 2. [`CustomizationSession`] tracks selections and visibility as the
//!    customer picks options.
//! 3. [`evaluate`] computes price and add-to-cart validity.
//! 4. A finished session becomes a [`Cart`] line; [`Cart::checkout`]
//!    assembles the order payload for the backing store.

pub mod cart;
pub mod catalog;
pub mod evaluate;
pub mod graph;
pub mod session;

pub use cart::Cart;
pub use catalog::{CatalogError, CatalogLoader, CatalogStore, MemoryCatalog, ProductCatalog, StoreError};
pub use graph::DependencyGraph;
pub use session::CustomizationSession;
