//! End-to-end storefront flow over the demo menu: load a catalog, walk a
//! customization dialog, add to cart, check out, persist the order.

use menu_engine::catalog::{seed, CatalogLoader, CatalogStore, MemoryCatalog};
use menu_engine::{Cart, CustomizationSession};
use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::order::{CustomerInfo, OrderStatus};
use shared::text::Language;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn seeded_store() -> Arc<MemoryCatalog> {
    let store = MemoryCatalog::new();
    seed::seed_demo_menu(&store);
    Arc::new(store)
}

async fn open_session(store: &Arc<MemoryCatalog>, menu_item_id: &str) -> CustomizationSession {
    let loader = CatalogLoader::new(store.clone() as Arc<dyn CatalogStore>);
    let catalog = loader
        .load(menu_item_id, &CancellationToken::new())
        .await
        .unwrap();
    CustomizationSession::new(catalog)
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "أحمد علي".into(),
        phone: "01012345678".into(),
        address: "12 Tahrir St, Cairo".into(),
        note: Some("extra napkins".into()),
    }
}

#[tokio::test]
async fn test_menu_browse_reaches_every_seeded_item() {
    let store = seeded_store();

    let categories = store.list_categories().await.unwrap();
    assert_eq!(
        categories.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        [seed::CAT_BURGERS, seed::CAT_MEAT, seed::CAT_CHICKEN, seed::CAT_BEVERAGES]
    );

    let mut item_ids = Vec::new();
    for category in &categories {
        for item in store.list_menu_items(&category.id).await.unwrap() {
            item_ids.push(item.id);
        }
    }
    assert_eq!(
        item_ids,
        [
            seed::ITEM_CLASSIC_BURGER,
            seed::ITEM_GRILLED_KOFTA,
            seed::ITEM_CRISPY_CHICKEN,
            seed::ITEM_LEMONADE,
        ]
    );

    // Every browsable item opens a customization session
    for id in &item_ids {
        let session = open_session(&store, id).await;
        assert_eq!(session.catalog().menu_item().id, *id);
    }
}

#[tokio::test]
async fn test_burger_order_from_dialog_to_stored_order() {
    let store = seeded_store();
    let mut session = open_session(&store, seed::ITEM_CLASSIC_BURGER).await;

    // Bread is bound directly and sauce is strengthened to required, so
    // the dialog opens incomplete.
    assert!(!session.is_valid());
    assert_eq!(
        session.missing_required_attributes(),
        [seed::ATTR_BREAD, seed::ATTR_SAUCE]
    );

    session.select(seed::ATTR_BREAD, seed::OPT_SEMOLINA); // +5.00
    session.select(seed::ATTR_SAUCE, seed::OPT_GARLIC); // +0.00
    assert!(session.is_valid());
    assert_eq!(session.total(2), Decimal::new(21000, 2)); // (100 + 5) * 2

    let line = session.build_line_item(2).unwrap();
    assert_eq!(line.selected_options[0].display(Language::En), "Semolina Bread (+5.00)");
    assert_eq!(line.selected_options[1].display(Language::Ar), "صوص ثوم");

    let mut cart = Cart::new();
    cart.add_line(line);
    assert_eq!(cart.subtotal(), Decimal::new(21000, 2));

    let order = cart.checkout(customer(), Decimal::new(2000, 2)).unwrap();
    assert_eq!(order.subtotal, Decimal::new(21000, 2));
    assert_eq!(order.total, Decimal::new(23000, 2));
    assert_eq!(order.status, OrderStatus::Pending);

    // The payload serializes with float money for the storefront API
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["total"], serde_json::json!(230.0));
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["items"][0]["quantity"], 2);

    let order_id = store.create_order(order).await.unwrap();
    assert!(!order_id.is_empty());
    assert_eq!(store.orders().len(), 1);
}

#[tokio::test]
async fn test_kofta_presentation_chain() {
    let store = seeded_store();
    let mut session = open_session(&store, seed::ITEM_GRILLED_KOFTA).await;

    // Only presentation at the root; everything else is gated.
    assert_eq!(session.visible_attributes(), [seed::ATTR_PRESENTATION]);

    // Meal path: meal_base revealed and required.
    session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL);
    assert!(session.is_visible(seed::ATTR_MEAL_BASE));
    assert_eq!(session.missing_required_attributes(), [seed::ATTR_MEAL_BASE]);

    // Switching to sandwich retracts meal_base, selection included, and
    // reveals bread instead.
    session.select(seed::ATTR_PRESENTATION, seed::OPT_SANDWICH);
    assert!(!session.is_visible(seed::ATTR_MEAL_BASE));
    assert!(session.selected_option(seed::ATTR_MEAL_BASE).is_none());
    assert!(session.is_visible(seed::ATTR_BREAD));
    assert_eq!(session.missing_required_attributes(), [seed::ATTR_BREAD]);

    session.select(seed::ATTR_BREAD, seed::OPT_SAJ);
    assert!(session.is_valid());
    // Sandwich and saj carry no surcharge
    assert_eq!(session.total(1), Decimal::new(12000, 2));
}

#[tokio::test]
async fn test_meal_with_pasta_prices_full_chain() {
    let store = seeded_store();
    let mut session = open_session(&store, seed::ITEM_CRISPY_CHICKEN).await;

    session.select(seed::ATTR_PRESENTATION, seed::OPT_MEAL); // +15.00
    session.select(seed::ATTR_MEAL_BASE, seed::OPT_PASTA);
    session.select(seed::ATTR_PASTA_SAUCE, seed::OPT_WHITE_SAUCE);
    assert!(session.is_valid());
    assert_eq!(session.total(1), Decimal::new(10500, 2)); // 90 + 15

    let line = session.build_line_item(1).unwrap();
    // Snapshots follow reveal order: presentation, meal_base, pasta_sauce
    let ids: Vec<&str> = line
        .selected_options
        .iter()
        .map(|s| s.attribute_id.as_str())
        .collect();
    assert_eq!(
        ids,
        [seed::ATTR_PRESENTATION, seed::ATTR_MEAL_BASE, seed::ATTR_PASTA_SAUCE]
    );
}

#[tokio::test]
async fn test_identical_customizations_merge_in_cart() {
    let store = seeded_store();
    let mut cart = Cart::new();

    for _ in 0..2 {
        let mut session = open_session(&store, seed::ITEM_CLASSIC_BURGER).await;
        session.select(seed::ATTR_BREAD, seed::OPT_BRIOCHE);
        session.select(seed::ATTR_SAUCE, seed::OPT_TAHINI);
        cart.add_line(session.build_line_item(1).unwrap());
    }

    let mut other = open_session(&store, seed::ITEM_CLASSIC_BURGER).await;
    other.select(seed::ATTR_BREAD, seed::OPT_SAJ);
    other.select(seed::ATTR_SAUCE, seed::OPT_TAHINI);
    cart.add_line(other.build_line_item(1).unwrap());

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.lines()[0].quantity, 2);
}

#[tokio::test]
async fn test_lemonade_needs_no_dialog() {
    let store = seeded_store();
    let session = open_session(&store, seed::ITEM_LEMONADE).await;

    assert!(session.visible_attributes().is_empty());
    assert!(session.is_valid());

    let line = session.build_line_item(3).unwrap();
    assert!(line.selected_options.is_empty());
    assert_eq!(line.line_total(), Decimal::new(7500, 2));
}

#[tokio::test]
async fn test_checkout_guards() {
    let store = seeded_store();
    let cart = Cart::new();
    let err = cart.checkout(customer(), Decimal::ZERO).unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyOrder);

    let mut session = open_session(&store, seed::ITEM_LEMONADE).await;
    let mut cart = Cart::new();
    cart.add_line(session.build_line_item(1).unwrap());

    let incomplete = CustomerInfo {
        name: "Ahmed".into(),
        ..Default::default()
    };
    let err = cart.checkout(incomplete, Decimal::ZERO).unwrap_err();
    assert_eq!(err.code, ErrorCode::CustomerInfoIncomplete);

    // reset leaves the session reusable for a second line
    session.reset();
    assert!(session.is_valid());
}
