//! Menu item / attribute binding

use serde::{Deserialize, Serialize};

use super::Attribute;

/// Binding between a menu item and an attribute that applies to it.
///
/// The set of bindings for an item defines which attributes take part in
/// its customization session at all; whether a bound attribute is visible
/// from the start depends on whether any dependency edge gates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemAttribute {
    pub id: String,
    pub menu_item_id: String,
    pub attribute_id: String,
    /// Per-item requiredness override. `None` falls through to the
    /// attribute's own `is_required`; `Some` can both strengthen and
    /// relax the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_override: Option<bool>,
}

impl MenuItemAttribute {
    /// Effective requiredness of this binding for the given attribute
    pub fn effective_required(&self, attribute: &Attribute) -> bool {
        self.required_override.unwrap_or(attribute.is_required)
    }
}
