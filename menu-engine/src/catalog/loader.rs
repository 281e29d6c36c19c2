//! Catalog Loader
//!
//! Materializes everything one customization session needs: the menu item,
//! the active attributes and options, the full dependency edge set, and the
//! item's bindings. All fetches must succeed; any failure aborts session
//! initialization so the dialog never operates on partially loaded data.

use super::store::{CatalogStore, StoreError};
use crate::graph::DependencyGraph;
use shared::error::{AppError, ErrorCode};
use shared::models::{Attribute, AttributeDependency, AttributeOption, MenuItem, MenuItemAttribute};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors raised while initializing a customization session
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One of the catalog fetches failed
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The dependency configuration contains a cycle; cascade resets would
    /// not terminate on it
    #[error("attribute dependency cycle: {}", path.join(" -> "))]
    CyclicDependency { path: Vec<String> },
    /// The dialog closed before the fetch resolved; the result is discarded
    #[error("catalog load cancelled")]
    Cancelled,
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Store(e) => {
                AppError::with_message(ErrorCode::CatalogUnavailable, e.to_string())
            }
            CatalogError::CyclicDependency { path } => {
                AppError::new(ErrorCode::CyclicDependency).with_detail("path", path.join(" -> "))
            }
            CatalogError::Cancelled => AppError::new(ErrorCode::LoadCancelled),
        }
    }
}

/// Fully materialized catalog slice for one menu item
///
/// Immutable once built; the selection session only reads from it.
#[derive(Debug)]
pub struct ProductCatalog {
    menu_item: MenuItem,
    attributes: HashMap<String, Attribute>,
    options: HashMap<String, AttributeOption>,
    /// attribute id -> its options, in sort order
    options_by_attribute: HashMap<String, Vec<AttributeOption>>,
    bindings: Vec<MenuItemAttribute>,
    graph: DependencyGraph,
}

impl ProductCatalog {
    pub fn menu_item(&self) -> &MenuItem {
        &self.menu_item
    }

    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes.get(id)
    }

    pub fn option(&self, id: &str) -> Option<&AttributeOption> {
        self.options.get(id)
    }

    /// Options of one attribute, ascending by sort order
    pub fn options_for(&self, attribute_id: &str) -> &[AttributeOption] {
        self.options_by_attribute
            .get(attribute_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn bindings(&self) -> &[MenuItemAttribute] {
        &self.bindings
    }

    pub fn binding_for(&self, attribute_id: &str) -> Option<&MenuItemAttribute> {
        self.bindings.iter().find(|b| b.attribute_id == attribute_id)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Whether the attribute is gated *for this item*: some dependency
    /// edge targets it whose parent option belongs to an attribute that
    /// is itself bound to the item. The edge set is global; an edge whose
    /// parent attribute never takes part in this session cannot fire and
    /// does not hide anything.
    pub fn is_gated_for_item(&self, attribute_id: &str) -> bool {
        self.graph
            .gating_options(attribute_id)
            .iter()
            .filter_map(|option_id| self.options.get(option_id))
            .any(|parent| {
                self.bindings
                    .iter()
                    .any(|b| b.attribute_id == parent.attribute_id)
            })
    }

    /// Root attributes of this item: bound, present in the catalog, and
    /// not gated for this item. Gated bound attributes only become
    /// visible once a parent option reveals them. Ordered by the
    /// attribute's sort order.
    pub fn root_attribute_ids(&self) -> Vec<String> {
        let mut roots: Vec<&Attribute> = self
            .bindings
            .iter()
            .filter(|b| !self.is_gated_for_item(&b.attribute_id))
            .filter_map(|b| self.attributes.get(&b.attribute_id))
            .collect();
        roots.sort_by_key(|a| a.sort_order);
        roots.iter().map(|a| a.id.clone()).collect()
    }
}

/// Loads a [`ProductCatalog`] through a [`CatalogStore`]
#[derive(Clone)]
pub struct CatalogLoader {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("store", &"<CatalogStore>")
            .finish()
    }
}

impl CatalogLoader {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Fetch and materialize the catalog for one menu item.
    ///
    /// The fetches run concurrently and all must succeed. `cancel` is the
    /// stale-response guard: when the dialog closes before the fetches
    /// resolve, the materialized result is discarded instead of feeding a
    /// session nobody is looking at. Cyclic dependency configurations are
    /// rejected here, before any selection can run into them.
    pub async fn load(
        &self,
        menu_item_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ProductCatalog, CatalogError> {
        let (menu_item, attributes, options, dependencies, bindings) = tokio::try_join!(
            self.store.get_menu_item(menu_item_id),
            self.store.list_attributes(true),
            self.store.list_options(None),
            self.store.list_dependencies(),
            self.store.list_bindings(menu_item_id),
        )?;

        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        Self::build(menu_item, attributes, options, dependencies, bindings)
    }

    fn build(
        menu_item: MenuItem,
        attributes: Vec<Attribute>,
        options: Vec<AttributeOption>,
        dependencies: Vec<AttributeDependency>,
        bindings: Vec<MenuItemAttribute>,
    ) -> Result<ProductCatalog, CatalogError> {
        let attribute_map: HashMap<String, Attribute> = attributes
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect();

        let mut options_by_attribute: HashMap<String, Vec<AttributeOption>> = HashMap::new();
        let mut option_map: HashMap<String, AttributeOption> = HashMap::new();
        for option in options {
            options_by_attribute
                .entry(option.attribute_id.clone())
                .or_default()
                .push(option.clone());
            option_map.insert(option.id.clone(), option);
        }
        for list in options_by_attribute.values_mut() {
            list.sort_by_key(|o| o.sort_order);
        }

        let graph = DependencyGraph::from_edges(&dependencies);
        graph
            .validate_acyclic(&option_map)
            .map_err(|path| CatalogError::CyclicDependency { path })?;

        tracing::info!(
            menu_item = %menu_item.id,
            attributes = attribute_map.len(),
            options = option_map.len(),
            edges = graph.edge_count(),
            bindings = bindings.len(),
            "📦 catalog loaded"
        );

        Ok(ProductCatalog {
            menu_item,
            attributes: attribute_map,
            options: option_map,
            options_by_attribute,
            bindings,
            graph,
        })
    }
}
