//! Cart
//!
//! Lines carry the flattened option snapshots produced by
//! [`CustomizationSession::build_line_item`](crate::session::CustomizationSession::build_line_item);
//! the cart itself never touches the catalog again. Checkout assembles the
//! [`OrderCreate`] payload; persisting it belongs to the store.

use chrono::Utc;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::order::{CartLineItem, CustomerInfo, OrderCreate, OrderLineItem, OrderStatus};
use uuid::Uuid;

/// Shopping cart for one storefront visitor
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add a line, merging into an existing line with the same item and
    /// option set instead of duplicating it. Returns the id of the line
    /// the quantity ended up on.
    pub fn add_line(&mut self, line: CartLineItem) -> Uuid {
        let key = line.customization_key();
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.customization_key() == key)
        {
            existing.quantity += line.quantity;
            return existing.id;
        }
        let id = line.id;
        self.lines.push(line);
        id
    }

    /// Change the quantity of a line. Quantity must stay positive;
    /// removal is explicit via [`remove_line`](Self::remove_line).
    pub fn set_quantity(&mut self, line_id: Uuid, quantity: i32) -> AppResult<()> {
        if quantity <= 0 {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("quantity", quantity));
        }
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| AppError::new(ErrorCode::CartLineNotFound))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_line(&mut self, line_id: Uuid) -> AppResult<()> {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        if self.lines.len() == before {
            return Err(AppError::new(ErrorCode::CartLineNotFound));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals, full precision
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Assemble the order payload for the external store.
    ///
    /// Requires a non-empty cart and complete customer contact details.
    /// The cart is left untouched; the caller clears it once the store
    /// accepts the order.
    pub fn checkout(
        &self,
        customer: CustomerInfo,
        delivery_fee: Decimal,
    ) -> AppResult<OrderCreate> {
        if self.lines.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyOrder));
        }
        if !customer.is_complete() {
            return Err(AppError::new(ErrorCode::CustomerInfoIncomplete));
        }

        let items: Vec<OrderLineItem> = self
            .lines
            .iter()
            .map(|line| OrderLineItem {
                menu_item_id: line.menu_item_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price(),
                line_total: line.line_total(),
                selected_options: line.selected_options.clone(),
            })
            .collect();

        let subtotal = self.subtotal();
        Ok(OrderCreate {
            customer,
            items,
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }
}
