//! Price & Validity Evaluator
//!
//! Pure, synchronous computation over the current selection state.
//! `is_valid` feeds the storefront's add-to-cart gating; nothing here
//! ever errors.

use crate::session::CustomizationSession;
use rust_decimal::Decimal;

/// Total price: base price plus all selected adjustments, times quantity.
///
/// Full decimal precision is preserved through the summation; rounding
/// happens only at display time.
pub fn compute_total(base_price: Decimal, session: &CustomizationSession, quantity: i32) -> Decimal {
    (base_price + session.price_adjustment()) * Decimal::from(quantity)
}

/// Whether the session is ready for add-to-cart.
///
/// Every binding that is effectively required AND currently visible must
/// have a selection. A required attribute that is not visible does not
/// block validity: it is simply not applicable on the current path
/// through the dependency tree. Attributes revealed by a dependency but
/// not bound to the item never gate validity.
pub fn is_valid(session: &CustomizationSession) -> bool {
    missing_required_attributes(session).is_empty()
}

/// Required visible attributes without a selection, in binding order
pub fn missing_required_attributes(session: &CustomizationSession) -> Vec<String> {
    let catalog = session.catalog();
    catalog
        .bindings()
        .iter()
        .filter(|binding| {
            let Some(attribute) = catalog.attribute(&binding.attribute_id) else {
                // Binding to an inactive or deleted attribute; nothing to require
                return false;
            };
            binding.effective_required(attribute)
                && session.is_visible(&binding.attribute_id)
                && session.selected_option(&binding.attribute_id).is_none()
        })
        .map(|binding| binding.attribute_id.clone())
        .collect()
}
