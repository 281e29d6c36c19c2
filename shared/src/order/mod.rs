//! Cart and order types
//!
//! A customization session flattens into [`SelectedOptionSnapshot`]s when an
//! item is added to the cart; the session itself never survives past that
//! point. Cart lines and the checkout payload carry these snapshots so the
//! storefront can render either language without re-resolving the catalog.

use crate::text::{Language, LocalizedText};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rounding strategy for display-time formatting (2 decimal places, half-up).
/// Engine arithmetic keeps full precision; only labels are rounded.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Flattened snapshot of one selected option, attached to a cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedOptionSnapshot {
    pub attribute_id: String,
    pub attribute_name: LocalizedText,
    pub option_id: String,
    pub option_name: LocalizedText,
    /// Signed price adjustment carried by the option at selection time
    pub price_adjustment: Decimal,
}

impl SelectedOptionSnapshot {
    /// Human-readable label with the price adjustment, e.g.
    /// `"Semolina Bread (+5.00)"`.
    pub fn display(&self, language: Language) -> String {
        let rounded = self
            .price_adjustment
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() { "-" } else { "+" };
        format!(
            "{} ({}{:.2})",
            self.option_name.get(language),
            sign,
            rounded.abs()
        )
    }
}

/// One line in the cart: a menu item plus its selected-options snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Cart-local line identifier
    pub id: Uuid,
    pub menu_item_id: String,
    pub name: LocalizedText,
    /// Item base price at the time the line was created
    pub unit_base_price: Decimal,
    pub selected_options: Vec<SelectedOptionSnapshot>,
    pub quantity: i32,
}

impl CartLineItem {
    /// Unit price: base price plus the sum of option adjustments
    pub fn unit_price(&self) -> Decimal {
        self.unit_base_price
            + self
                .selected_options
                .iter()
                .map(|o| o.price_adjustment)
                .sum::<Decimal>()
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }

    /// Key identifying the customization of this line (item + option set),
    /// used to merge identical lines instead of duplicating them.
    pub fn customization_key(&self) -> String {
        let mut option_ids: Vec<&str> = self
            .selected_options
            .iter()
            .map(|o| o.option_id.as_str())
            .collect();
        option_ids.sort_unstable();
        format!("{}|{}", self.menu_item_id, option_ids.join(","))
    }
}

/// Customer contact details collected at checkout
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CustomerInfo {
    /// Name, phone and address are all mandatory for delivery.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// One line of a placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub menu_item_id: String,
    pub name: LocalizedText,
    pub quantity: i32,
    /// Unit price with option adjustments applied
    pub unit_price: Decimal,
    pub line_total: Decimal,
    pub selected_options: Vec<SelectedOptionSnapshot>,
}

/// Order creation payload handed to the external store
///
/// This is the engine's only externally visible product: the flattened
/// option snapshots plus the computed totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: CustomerInfo,
    pub items: Vec<OrderLineItem>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
