//! Demo menu seed data
//!
//! The presentation → meal_base → pasta_sauce / bread taxonomy expressed
//! as catalog rows. The chain is configuration, not control flow: the
//! engine resolves it through the same dependency graph as any
//! admin-created attribute tree.

use super::store::MemoryCatalog;
use rust_decimal::Decimal;
use shared::models::{Attribute, AttributeDependency, AttributeOption, Category, MenuItem, MenuItemAttribute};
use shared::text::LocalizedText;

pub const ATTR_PRESENTATION: &str = "attr_presentation";
pub const ATTR_MEAL_BASE: &str = "attr_meal_base";
pub const ATTR_PASTA_SAUCE: &str = "attr_pasta_sauce";
pub const ATTR_BREAD: &str = "attr_bread";
pub const ATTR_SAUCE: &str = "attr_sauce";

pub const OPT_SANDWICH: &str = "opt_sandwich";
pub const OPT_MEAL: &str = "opt_meal";
pub const OPT_PASTA: &str = "opt_pasta";
pub const OPT_RICE: &str = "opt_rice";
pub const OPT_WHITE_SAUCE: &str = "opt_white_sauce";
pub const OPT_RED_SAUCE: &str = "opt_red_sauce";
pub const OPT_BRIOCHE: &str = "opt_brioche";
pub const OPT_SEMOLINA: &str = "opt_semolina";
pub const OPT_SAJ: &str = "opt_saj";
pub const OPT_GARLIC: &str = "opt_garlic";
pub const OPT_TAHINI: &str = "opt_tahini";
pub const OPT_CHEESE: &str = "opt_cheese";

pub const CAT_BURGERS: &str = "cat_burgers";
pub const CAT_MEAT: &str = "cat_meat";
pub const CAT_CHICKEN: &str = "cat_chicken";
pub const CAT_BEVERAGES: &str = "cat_beverages";

pub const ITEM_CLASSIC_BURGER: &str = "item_classic_burger";
pub const ITEM_GRILLED_KOFTA: &str = "item_grilled_kofta";
pub const ITEM_CRISPY_CHICKEN: &str = "item_crispy_chicken";
/// Beverage without any bound attributes
pub const ITEM_LEMONADE: &str = "item_lemonade";

fn attribute(id: &str, ar: &str, en: &str, kind: &str, is_required: bool, sort_order: i32) -> Attribute {
    Attribute {
        id: id.into(),
        name: LocalizedText::new(ar, en),
        description: None,
        kind: kind.into(),
        is_required,
        is_active: true,
        sort_order,
    }
}

fn option(
    id: &str,
    attribute_id: &str,
    ar: &str,
    en: &str,
    adjustment: Decimal,
    sort_order: i32,
) -> AttributeOption {
    AttributeOption {
        id: id.into(),
        attribute_id: attribute_id.into(),
        name: LocalizedText::new(ar, en),
        price_adjustment: adjustment,
        is_active: true,
        sort_order,
    }
}

fn dependency(id: &str, parent_option_id: &str, child_attribute_id: &str) -> AttributeDependency {
    AttributeDependency {
        id: id.into(),
        parent_option_id: parent_option_id.into(),
        child_attribute_id: child_attribute_id.into(),
    }
}

fn binding(menu_item_id: &str, attribute_id: &str, required_override: Option<bool>) -> MenuItemAttribute {
    MenuItemAttribute {
        id: format!("bind_{menu_item_id}_{attribute_id}"),
        menu_item_id: menu_item_id.into(),
        attribute_id: attribute_id.into(),
        required_override,
    }
}

fn category(id: &str, ar: &str, en: &str, sort_order: i32) -> Category {
    Category {
        id: id.into(),
        name: LocalizedText::new(ar, en),
        sort_order,
        is_active: true,
    }
}

fn menu_item(id: &str, ar: &str, en: &str, price: Decimal, category_id: &str, sort_order: i32) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: LocalizedText::new(ar, en),
        description: None,
        price,
        image: None,
        category_id: category_id.into(),
        sort_order,
        is_active: true,
    }
}

/// Populate the store with the demo menu.
pub fn seed_demo_menu(store: &MemoryCatalog) {
    // ==================== Attributes ====================
    store.insert_attribute(attribute(
        ATTR_PRESENTATION, "طريقة التقديم", "Presentation", "serving_type", true, 0,
    ));
    store.insert_attribute(attribute(
        ATTR_MEAL_BASE, "نوع الوجبة", "Meal Type", "meal_base", true, 1,
    ));
    store.insert_attribute(attribute(
        ATTR_PASTA_SAUCE, "صوص المكرونة", "Pasta Sauce", "pasta_sauce", true, 2,
    ));
    store.insert_attribute(attribute(
        ATTR_BREAD, "نوع العيش", "Bread Type", "bread_type", true, 3,
    ));
    // Sauce is optional by default; items may strengthen it per binding
    store.insert_attribute(attribute(
        ATTR_SAUCE, "نوع الصوص", "Sauce Type", "sauce_type", false, 4,
    ));

    // ==================== Options ====================
    store.insert_option(option(
        OPT_SANDWICH, ATTR_PRESENTATION, "ساندويتش", "Sandwich", Decimal::ZERO, 0,
    ));
    store.insert_option(option(
        OPT_MEAL, ATTR_PRESENTATION, "وجبة", "Meal", Decimal::new(1500, 2), 1,
    ));

    store.insert_option(option(
        OPT_PASTA, ATTR_MEAL_BASE, "مكرونة", "Pasta", Decimal::ZERO, 0,
    ));
    store.insert_option(option(
        OPT_RICE, ATTR_MEAL_BASE, "أرز", "Rice", Decimal::ZERO, 1,
    ));

    store.insert_option(option(
        OPT_WHITE_SAUCE, ATTR_PASTA_SAUCE, "صوص أبيض", "White Sauce", Decimal::ZERO, 0,
    ));
    store.insert_option(option(
        OPT_RED_SAUCE, ATTR_PASTA_SAUCE, "صوص أحمر", "Red Sauce", Decimal::ZERO, 1,
    ));

    store.insert_option(option(
        OPT_BRIOCHE, ATTR_BREAD, "عيش بريوش", "Brioche Bread", Decimal::ZERO, 0,
    ));
    store.insert_option(option(
        OPT_SEMOLINA, ATTR_BREAD, "عيش سيمولينا", "Semolina Bread", Decimal::new(500, 2), 1,
    ));
    store.insert_option(option(
        OPT_SAJ, ATTR_BREAD, "عيش صاج", "Saj Bread", Decimal::ZERO, 2,
    ));

    store.insert_option(option(
        OPT_GARLIC, ATTR_SAUCE, "صوص ثوم", "Garlic Sauce", Decimal::ZERO, 0,
    ));
    store.insert_option(option(
        OPT_TAHINI, ATTR_SAUCE, "صوص طحينة", "Tahini Sauce", Decimal::ZERO, 1,
    ));
    store.insert_option(option(
        OPT_CHEESE, ATTR_SAUCE, "صوص جبنة", "Cheese Sauce", Decimal::new(350, 2), 2,
    ));

    // ==================== Dependency edges ====================
    // presentation=meal  -> meal_base
    // meal_base=pasta    -> pasta_sauce
    // presentation=sandwich -> bread
    store.insert_dependency(dependency("dep_meal_base", OPT_MEAL, ATTR_MEAL_BASE));
    store.insert_dependency(dependency("dep_pasta_sauce", OPT_PASTA, ATTR_PASTA_SAUCE));
    store.insert_dependency(dependency("dep_bread", OPT_SANDWICH, ATTR_BREAD));

    // ==================== Categories ====================
    store.insert_category(category(CAT_BURGERS, "البرجر", "Burgers", 0));
    store.insert_category(category(CAT_MEAT, "اللحوم", "Meat", 1));
    store.insert_category(category(CAT_CHICKEN, "الفراخ", "Chicken", 2));
    store.insert_category(category(CAT_BEVERAGES, "مشروبات", "Beverages", 3));

    // ==================== Menu items ====================
    store.insert_menu_item(menu_item(
        ITEM_CLASSIC_BURGER, "برجر كلاسيك", "Classic Burger",
        Decimal::new(10000, 2), CAT_BURGERS, 0,
    ));
    store.insert_menu_item(menu_item(
        ITEM_GRILLED_KOFTA, "كفتة مشوية", "Grilled Kofta",
        Decimal::new(12000, 2), CAT_MEAT, 0,
    ));
    store.insert_menu_item(menu_item(
        ITEM_CRISPY_CHICKEN, "فراخ كرسبي", "Crispy Chicken",
        Decimal::new(9000, 2), CAT_CHICKEN, 0,
    ));
    store.insert_menu_item(menu_item(
        ITEM_LEMONADE, "ليمونادة", "Lemonade",
        Decimal::new(2500, 2), CAT_BEVERAGES, 0,
    ));

    // ==================== Bindings ====================
    // Burgers come as a sandwich: bread directly, sauce strengthened to
    // required for this item.
    store.insert_binding(binding(ITEM_CLASSIC_BURGER, ATTR_BREAD, None));
    store.insert_binding(binding(ITEM_CLASSIC_BURGER, ATTR_SAUCE, Some(true)));

    // Meat and chicken go through the presentation chain; the gated
    // attributes are bound so they become required once revealed.
    for item in [ITEM_GRILLED_KOFTA, ITEM_CRISPY_CHICKEN] {
        store.insert_binding(binding(item, ATTR_PRESENTATION, None));
        store.insert_binding(binding(item, ATTR_MEAL_BASE, None));
        store.insert_binding(binding(item, ATTR_PASTA_SAUCE, None));
        store.insert_binding(binding(item, ATTR_BREAD, None));
    }
}
