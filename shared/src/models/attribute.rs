//! Attribute Model

use crate::text::LocalizedText;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attribute entity - a customizable dimension of a menu item
/// (e.g. bread type, presentation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Open classification tag, not a closed enum
    /// (e.g. "serving_type", "bread_type", "sauce_type")
    pub kind: String,
    /// Default-required flag; bindings may override per item
    pub is_required: bool,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Attribute option - one selectable value within an attribute
///
/// Options of one attribute are mutually exclusive (single-select).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeOption {
    pub id: String,
    /// Owning attribute reference
    pub attribute_id: String,
    pub name: LocalizedText,
    /// Signed adjustment added to the item base price when selected
    pub price_adjustment: Decimal,
    pub is_active: bool,
    pub sort_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_serialize_roundtrip() {
        let option = AttributeOption {
            id: "opt_semolina".into(),
            attribute_id: "attr_bread".into(),
            name: LocalizedText::new("عيش سيمولينا", "Semolina Bread"),
            price_adjustment: Decimal::new(500, 2), // 5.00
            is_active: true,
            sort_order: 2,
        };

        let json = serde_json::to_string(&option).unwrap();
        let back: AttributeOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "opt_semolina");
        assert_eq!(back.price_adjustment, Decimal::new(500, 2));
    }

    #[test]
    fn test_attribute_skips_empty_description() {
        let attribute = Attribute {
            id: "attr_presentation".into(),
            name: LocalizedText::new("طريقة التقديم", "Presentation"),
            description: None,
            kind: "serving_type".into(),
            is_required: true,
            is_active: true,
            sort_order: 0,
        };

        let json = serde_json::to_string(&attribute).unwrap();
        assert!(!json.contains("description"));
    }
}
