//! Catalog storage boundary
//!
//! The hosted backend owns persistence, querying, and realtime updates;
//! the engine only needs "fetch records matching a predicate" and "persist
//! an order". [`CatalogStore`] is that boundary. The in-memory
//! implementation backs tests and the demo seed; a real backend adapter
//! implements the same trait out of tree.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Attribute, AttributeDependency, AttributeOption, Category, MenuItem, MenuItemAttribute};
use shared::order::OrderCreate;
use thiserror::Error;

/// Errors crossing the storage boundary
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Backend rejected or failed the request
    #[error("storage backend error: {0}")]
    Backend(String),
    /// Requested record does not exist
    #[error("{0} not found")]
    NotFound(String),
}

/// Read/write surface the engine needs from the external store.
///
/// All list reads return active records only where the entity carries an
/// `is_active` flag, ordered ascending by `sort_order`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Attributes, optionally including soft-disabled ones
    async fn list_attributes(&self, active_only: bool) -> Result<Vec<Attribute>, StoreError>;

    /// Active options, for one attribute or for all
    async fn list_options(
        &self,
        attribute_id: Option<&str>,
    ) -> Result<Vec<AttributeOption>, StoreError>;

    /// The full dependency edge set (not filtered per product)
    async fn list_dependencies(&self) -> Result<Vec<AttributeDependency>, StoreError>;

    /// Attribute bindings for one menu item
    async fn list_bindings(&self, menu_item_id: &str) -> Result<Vec<MenuItemAttribute>, StoreError>;

    /// Active menu categories
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Active menu items in a category
    async fn list_menu_items(&self, category_id: &str) -> Result<Vec<MenuItem>, StoreError>;

    /// One menu item by id
    async fn get_menu_item(&self, id: &str) -> Result<MenuItem, StoreError>;

    /// Persist a placed order, returning its id
    async fn create_order(&self, order: OrderCreate) -> Result<String, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryCatalogInner {
    attributes: Vec<Attribute>,
    options: Vec<AttributeOption>,
    dependencies: Vec<AttributeDependency>,
    bindings: Vec<MenuItemAttribute>,
    categories: Vec<Category>,
    menu_items: Vec<MenuItem>,
    orders: Vec<(String, OrderCreate)>,
}

/// In-memory [`CatalogStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<MemoryCatalogInner>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_attribute(&self, attribute: Attribute) {
        self.inner.write().attributes.push(attribute);
    }

    pub fn insert_option(&self, option: AttributeOption) {
        self.inner.write().options.push(option);
    }

    pub fn insert_dependency(&self, dependency: AttributeDependency) {
        self.inner.write().dependencies.push(dependency);
    }

    pub fn insert_binding(&self, binding: MenuItemAttribute) {
        self.inner.write().bindings.push(binding);
    }

    pub fn insert_category(&self, category: Category) {
        self.inner.write().categories.push(category);
    }

    pub fn insert_menu_item(&self, item: MenuItem) {
        self.inner.write().menu_items.push(item);
    }

    /// Orders persisted through [`CatalogStore::create_order`]
    pub fn orders(&self) -> Vec<(String, OrderCreate)> {
        self.inner.read().orders.clone()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_attributes(&self, active_only: bool) -> Result<Vec<Attribute>, StoreError> {
        let inner = self.inner.read();
        let mut attributes: Vec<Attribute> = inner
            .attributes
            .iter()
            .filter(|a| !active_only || a.is_active)
            .cloned()
            .collect();
        attributes.sort_by_key(|a| a.sort_order);
        Ok(attributes)
    }

    async fn list_options(
        &self,
        attribute_id: Option<&str>,
    ) -> Result<Vec<AttributeOption>, StoreError> {
        let inner = self.inner.read();
        let mut options: Vec<AttributeOption> = inner
            .options
            .iter()
            .filter(|o| o.is_active)
            .filter(|o| attribute_id.is_none_or(|id| o.attribute_id == id))
            .cloned()
            .collect();
        options.sort_by_key(|o| o.sort_order);
        Ok(options)
    }

    async fn list_dependencies(&self) -> Result<Vec<AttributeDependency>, StoreError> {
        Ok(self.inner.read().dependencies.clone())
    }

    async fn list_bindings(
        &self,
        menu_item_id: &str,
    ) -> Result<Vec<MenuItemAttribute>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .bindings
            .iter()
            .filter(|b| b.menu_item_id == menu_item_id)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let inner = self.inner.read();
        let mut categories: Vec<Category> = inner
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    async fn list_menu_items(&self, category_id: &str) -> Result<Vec<MenuItem>, StoreError> {
        let inner = self.inner.read();
        let mut items: Vec<MenuItem> = inner
            .menu_items
            .iter()
            .filter(|m| m.is_active && m.category_id == category_id)
            .cloned()
            .collect();
        items.sort_by_key(|m| m.sort_order);
        Ok(items)
    }

    async fn get_menu_item(&self, id: &str) -> Result<MenuItem, StoreError> {
        let inner = self.inner.read();
        inner
            .menu_items
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("menu item {}", id)))
    }

    async fn create_order(&self, order: OrderCreate) -> Result<String, StoreError> {
        let id = format!("order_{}", uuid::Uuid::new_v4());
        let mut inner = self.inner.write();
        inner.orders.push((id.clone(), order));
        tracing::info!(order_id = %id, "order persisted");
        Ok(id)
    }
}
