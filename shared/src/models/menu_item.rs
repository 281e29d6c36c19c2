//! Menu Item and Category Models

use crate::text::LocalizedText;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Base price before option adjustments
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category reference (String ID, required)
    pub category_id: String,
    pub sort_order: i32,
    pub is_active: bool,
}
