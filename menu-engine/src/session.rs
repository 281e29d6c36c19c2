//! Selection State Machine
//!
//! One session per open customization dialog. The state is the pair
//! (selected options, visible attributes); every transition runs
//! synchronously inside the triggering UI event, so there is no shared
//! mutable state and no locking.

use crate::catalog::ProductCatalog;
use crate::evaluate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::order::{CartLineItem, SelectedOptionSnapshot};
use std::collections::HashMap;
use uuid::Uuid;

/// Live customization state for one menu item
///
/// Created when the dialog opens, discarded when it closes or the item is
/// added to the cart. Reopening or switching products means a new session
/// (or [`reset`](Self::reset) for the same product).
#[derive(Debug)]
pub struct CustomizationSession {
    catalog: ProductCatalog,
    /// attribute id -> selected option id
    selected: HashMap<String, String>,
    /// Currently visible attributes, in reveal order
    visible: Vec<String>,
    /// Sum of price adjustments over all selected options
    price_adjustment: Decimal,
}

impl CustomizationSession {
    /// Open a session: root bindings visible, nothing selected.
    pub fn new(catalog: ProductCatalog) -> Self {
        let visible = catalog.root_attribute_ids();
        Self {
            catalog,
            selected: HashMap::new(),
            visible,
            price_adjustment: Decimal::ZERO,
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Visible attributes in reveal order
    pub fn visible_attributes(&self) -> &[String] {
        &self.visible
    }

    pub fn is_visible(&self, attribute_id: &str) -> bool {
        self.visible.iter().any(|a| a == attribute_id)
    }

    pub fn selected_option(&self, attribute_id: &str) -> Option<&str> {
        self.selected.get(attribute_id).map(String::as_str)
    }

    pub fn selected_options(&self) -> &HashMap<String, String> {
        &self.selected
    }

    /// Current total price adjustment over all selected options
    pub fn price_adjustment(&self) -> Decimal {
        self.price_adjustment
    }

    /// Apply a selection event.
    ///
    /// Records the option for the attribute (overwriting any prior pick),
    /// reveals the option's child attributes, and on a changed selection
    /// cascades a reset of the prior option's children: they lose
    /// visibility and any selection of theirs is dropped. The cascade is
    /// one level deep; grandchildren revealed by a removed child keep
    /// their state.
    ///
    /// Events that do not make sense in the current state (unknown ids,
    /// an option of a different attribute, an attribute that is not
    /// visible) are ignored. Returns whether the event was applied.
    pub fn select(&mut self, attribute_id: &str, option_id: &str) -> bool {
        if !self.is_visible(attribute_id) {
            tracing::debug!(attribute_id, option_id, "selection for non-visible attribute ignored");
            return false;
        }
        let Some(option) = self.catalog.option(option_id) else {
            tracing::debug!(attribute_id, option_id, "selection of unknown option ignored");
            return false;
        };
        if option.attribute_id != attribute_id {
            tracing::debug!(attribute_id, option_id, "option does not belong to attribute, ignored");
            return false;
        }

        let prior = self
            .selected
            .insert(attribute_id.to_string(), option_id.to_string());

        // Reveal children of the new option (idempotent union)
        for child in self.catalog.graph().children_of(option_id) {
            if !self.visible.iter().any(|a| a == child) {
                self.visible.push(child.clone());
            }
        }

        // Changed selection: retract what the prior option used to reveal
        if let Some(prior_option) = prior
            && prior_option != option_id
        {
            let removed: Vec<String> = self
                .catalog
                .graph()
                .children_of(&prior_option)
                .to_vec();
            for child in &removed {
                self.visible.retain(|a| a != child);
                self.selected.remove(child);
            }
        }

        self.recompute_price_adjustment();
        true
    }

    /// Back to the initial state: root bindings visible, nothing selected.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.visible = self.catalog.root_attribute_ids();
        self.price_adjustment = Decimal::ZERO;
    }

    fn recompute_price_adjustment(&mut self) {
        self.price_adjustment = self
            .selected
            .values()
            .filter_map(|option_id| self.catalog.option(option_id))
            .map(|o| o.price_adjustment)
            .sum();
    }

    /// Whether every required visible attribute has a selection
    pub fn is_valid(&self) -> bool {
        evaluate::is_valid(self)
    }

    /// Total price for the given quantity
    pub fn total(&self, quantity: i32) -> Decimal {
        evaluate::compute_total(self.catalog.menu_item().price, self, quantity)
    }

    /// Convert the session into a cart line.
    ///
    /// Fails while the selection is incomplete; the selections are
    /// flattened to bilingual label snapshots and the session can be
    /// discarded afterwards.
    pub fn build_line_item(&self, quantity: i32) -> AppResult<CartLineItem> {
        if quantity <= 0 {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("quantity", quantity));
        }
        if !self.is_valid() {
            return Err(AppError::new(ErrorCode::SelectionIncomplete)
                .with_detail("missing", self.missing_required_attributes().join(",")));
        }

        // Flatten in reveal order so cart labels follow the dialog layout
        let mut snapshots = Vec::new();
        for attribute_id in &self.visible {
            let Some(option_id) = self.selected.get(attribute_id) else {
                continue;
            };
            let (Some(attribute), Some(option)) = (
                self.catalog.attribute(attribute_id),
                self.catalog.option(option_id),
            ) else {
                continue;
            };
            snapshots.push(SelectedOptionSnapshot {
                attribute_id: attribute.id.clone(),
                attribute_name: attribute.name.clone(),
                option_id: option.id.clone(),
                option_name: option.name.clone(),
                price_adjustment: option.price_adjustment,
            });
        }

        let item = self.catalog.menu_item();
        Ok(CartLineItem {
            id: Uuid::new_v4(),
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_base_price: item.price,
            selected_options: snapshots,
            quantity,
        })
    }

    /// Required visible attributes that still lack a selection
    pub fn missing_required_attributes(&self) -> Vec<String> {
        evaluate::missing_required_attributes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLoader, MemoryCatalog, seed};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    async fn open_session(menu_item_id: &str) -> CustomizationSession {
        let store = MemoryCatalog::new();
        seed::seed_demo_menu(&store);
        let loader = CatalogLoader::new(Arc::new(store));
        let catalog = loader
            .load(menu_item_id, &CancellationToken::new())
            .await
            .unwrap();
        CustomizationSession::new(catalog)
    }

    #[tokio::test]
    async fn test_initial_state_shows_roots_only() {
        let session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        assert_eq!(session.visible_attributes(), [seed::ATTR_PRESENTATION]);
        assert!(session.selected_options().is_empty());
        assert_eq!(session.price_adjustment(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_select_reveals_children() {
        let mut session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        assert!(session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL));
        assert!(session.is_visible(seed::ATTR_MEAL_BASE));
        assert!(!session.is_visible(seed::ATTR_BREAD));

        assert!(session.select(seed::ATTR_MEAL_BASE, seed::OPT_PASTA));
        assert!(session.is_visible(seed::ATTR_PASTA_SAUCE));
    }

    #[tokio::test]
    async fn test_changed_selection_cascades_one_level() {
        let mut session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL);
        session.select(seed::ATTR_MEAL_BASE, seed::OPT_PASTA);
        session.select(seed::ATTR_PASTA_SAUCE, seed::OPT_WHITE_SAUCE);

        // Switching presentation retracts meal_base (direct child) only;
        // pasta_sauce was revealed by meal_base and is deliberately left
        // in place (one-level cascade).
        session.select(seed::ATTR_PRESENTATION, seed::OPT_SANDWICH);
        assert!(!session.is_visible(seed::ATTR_MEAL_BASE));
        assert!(session.selected_option(seed::ATTR_MEAL_BASE).is_none());
        assert!(session.is_visible(seed::ATTR_PASTA_SAUCE));
        assert!(session.is_visible(seed::ATTR_BREAD));
    }

    #[tokio::test]
    async fn test_reselecting_same_option_keeps_children() {
        let mut session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL);
        session.select(seed::ATTR_MEAL_BASE, seed::OPT_PASTA);

        session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL);
        assert!(session.is_visible(seed::ATTR_MEAL_BASE));
        assert_eq!(
            session.selected_option(seed::ATTR_MEAL_BASE),
            Some(seed::OPT_PASTA)
        );
    }

    #[tokio::test]
    async fn test_unknown_ids_are_no_ops() {
        let mut session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        assert!(!session.select(seed::ATTR_PRESENTATION, "opt_ghost"));
        assert!(!session.select("attr_ghost", seed::OPT_MEAL));
        // Option belonging to a different attribute
        assert!(!session.select(seed::ATTR_PRESENTATION, seed::OPT_PASTA));
        assert!(session.selected_options().is_empty());
    }

    #[tokio::test]
    async fn test_selecting_hidden_attribute_is_ignored() {
        let mut session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        // meal_base is gated behind presentation=meal
        assert!(!session.select(seed::ATTR_MEAL_BASE, seed::OPT_PASTA));
    }

    #[tokio::test]
    async fn test_reset_restores_initial_state() {
        let mut session = open_session(seed::ITEM_GRILLED_KOFTA).await;
        session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL);
        session.select(seed::ATTR_MEAL_BASE, seed::OPT_PASTA);

        session.reset();
        assert_eq!(session.visible_attributes(), [seed::ATTR_PRESENTATION]);
        assert!(session.selected_options().is_empty());
        assert_eq!(session.price_adjustment(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_build_line_item_flattens_selections() {
        let mut session = open_session(seed::ITEM_CLASSIC_BURGER).await;
        session.select(seed::ATTR_BREAD, seed::OPT_SEMOLINA);
        session.select(seed::ATTR_SAUCE, seed::OPT_GARLIC);

        let line = session.build_line_item(2).unwrap();
        assert_eq!(line.menu_item_id, seed::ITEM_CLASSIC_BURGER);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.selected_options.len(), 2);
        assert_eq!(line.unit_price(), Decimal::new(10500, 2)); // 100 + 5
    }

    #[tokio::test]
    async fn test_build_line_item_rejects_incomplete_selection() {
        let session = open_session(seed::ITEM_CLASSIC_BURGER).await;
        let err = session.build_line_item(1).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::SelectionIncomplete);
    }

    #[tokio::test]
    async fn test_build_line_item_rejects_bad_quantity() {
        let mut session = open_session(seed::ITEM_CLASSIC_BURGER).await;
        session.select(seed::ATTR_BREAD, seed::OPT_BRIOCHE);
        session.select(seed::ATTR_SAUCE, seed::OPT_GARLIC);
        let err = session.build_line_item(0).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::InvalidQuantity);
    }
}
