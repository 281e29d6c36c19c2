//! Domain models for the ordering platform

mod attribute;
mod binding;
mod dependency;
mod menu_item;

pub use attribute::{Attribute, AttributeOption};
pub use binding::MenuItemAttribute;
pub use dependency::AttributeDependency;
pub use menu_item::{Category, MenuItem};
