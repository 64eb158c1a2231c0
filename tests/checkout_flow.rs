use std::sync::Arc;

use rust_decimal::Decimal;

use crackers_storefront::{
    cart::CartStore,
    catalog::Catalog,
    checkout::{self, CheckoutForm, PaymentMethod},
    config::default_tax_rate,
    error::AppError,
    models::CartState,
    storage::{CART_KEY, MemoryStore, SnapshotStore},
};

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

fn valid_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Asha".into(),
        last_name: "Kumar".into(),
        email: "asha@example.com".into(),
        address: "12 Market Street".into(),
        city: "Sivakasi".into(),
        state: "Tamil Nadu".into(),
        zip_code: "626123".into(),
        country: "India".into(),
        payment_method: PaymentMethod::Credit,
        card_number: "4111 1111 1111 1111".into(),
        card_name: "Asha Kumar".into(),
        expiry_date: "12/29".into(),
        cvv: "123".into(),
    }
}

// Full flow: add to cart -> place order -> cart is cleared and the cleared
// state is what sits in storage.
#[test]
fn place_order_derives_totals_and_clears_the_cart() -> anyhow::Result<()> {
    let storage: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
    let catalog = Catalog::builtin();
    let mut cart = CartStore::new(Arc::clone(&storage));

    // Product 2: 12.99, no discount.
    let p2 = catalog.by_id(2).expect("built-in product").clone();
    cart.add(&p2);

    let order = checkout::place_order(&mut cart, &valid_form(), default_tax_rate())?;

    assert_eq!(order.subtotal, dec("12.99"));
    assert_eq!(order.tax, dec("1.04"));
    assert_eq!(order.total, dec("14.03"));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id, 2);
    assert_eq!(order.items[0].quantity, 1);
    assert_eq!(order.items[0].unit_price, dec("12.99"));
    assert!(order.order_number.starts_with("ORD-"));

    assert!(cart.state().is_empty());
    let snapshot = storage.load(CART_KEY)?.expect("cart snapshot");
    let persisted: CartState = serde_json::from_str(&snapshot)?;
    assert!(persisted.is_empty());
    Ok(())
}

// Tax applies to the discount-inclusive subtotal, not the list price.
#[test]
fn tax_base_uses_discounted_prices() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let mut cart = CartStore::new(Arc::new(MemoryStore::new()));

    // Product 1: 49.99 at 10% off -> 44.99 effective.
    let p1 = catalog.by_id(1).expect("built-in product").clone();
    cart.add(&p1);
    cart.add(&p1);

    let order = checkout::place_order(&mut cart, &valid_form(), default_tax_rate())?;
    assert_eq!(order.subtotal, dec("89.98"));
    assert_eq!(order.tax, dec("7.20"));
    assert_eq!(order.total, dec("97.18"));
    Ok(())
}

#[test]
fn empty_cart_cannot_be_checked_out() {
    let mut cart = CartStore::new(Arc::new(MemoryStore::new()));
    let err = checkout::place_order(&mut cart, &valid_form(), default_tax_rate())
        .expect_err("empty cart must be rejected");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn validation_reports_every_failing_field_at_once() {
    let mut form = CheckoutForm {
        email: "not-an-email".into(),
        card_number: "1234".into(),
        expiry_date: "13-29".into(),
        cvv: "12".into(),
        ..valid_form()
    };
    form.first_name.clear();

    let errors = checkout::validate(&form);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"first_name"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"card_number"));
    assert!(fields.contains(&"expiry_date"));
    assert!(fields.contains(&"cvv"));
}

#[test]
fn failed_validation_leaves_the_cart_untouched() {
    let catalog = Catalog::builtin();
    let mut cart = CartStore::new(Arc::new(MemoryStore::new()));
    let p4 = catalog.by_id(4).expect("built-in product").clone();
    cart.add(&p4);
    let before = cart.state().clone();

    let mut form = valid_form();
    form.email = "broken".into();
    let err = checkout::place_order(&mut cart, &form, default_tax_rate())
        .expect_err("invalid form must be rejected");
    assert!(!err.field_errors().is_empty());
    assert_eq!(cart.state(), &before);
}

// Card fields are only validated for the credit payment method.
#[test]
fn paypal_checkout_skips_card_fields() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let mut cart = CartStore::new(Arc::new(MemoryStore::new()));
    let p2 = catalog.by_id(2).expect("built-in product").clone();
    cart.add(&p2);

    let form = CheckoutForm {
        payment_method: PaymentMethod::Paypal,
        card_number: String::new(),
        card_name: String::new(),
        expiry_date: String::new(),
        cvv: String::new(),
        ..valid_form()
    };
    let order = checkout::place_order(&mut cart, &form, default_tax_rate())?;
    assert_eq!(order.total, dec("14.03"));
    Ok(())
}
