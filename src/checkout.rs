use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::cart::CartStore;
use crate::error::{AppError, AppResult, FieldError};
use crate::models::{Order, OrderItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Credit,
    Paypal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// Field-level validation of the checkout form. Returns every failure at
/// once so the UI can mark all offending fields in one pass.
pub fn validate(form: &CheckoutForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required = [
        ("first_name", &form.first_name),
        ("last_name", &form.last_name),
        ("email", &form.email),
        ("address", &form.address),
        ("city", &form.city),
        ("state", &form.state),
        ("zip_code", &form.zip_code),
        ("country", &form.country),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, "This field is required"));
        }
    }

    if !form.email.trim().is_empty() && !is_valid_email(&form.email) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }

    if form.payment_method == PaymentMethod::Credit {
        let digits: String = form
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if digits.is_empty() {
            errors.push(FieldError::new("card_number", "Card number is required"));
        } else if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new(
                "card_number",
                "Please enter a valid 16-digit card number",
            ));
        }

        if form.card_name.trim().is_empty() {
            errors.push(FieldError::new("card_name", "Name on card is required"));
        }

        if form.expiry_date.is_empty() {
            errors.push(FieldError::new("expiry_date", "Expiry date is required"));
        } else if !is_valid_expiry(&form.expiry_date) {
            errors.push(FieldError::new("expiry_date", "Please use MM/YY format"));
        }

        if form.cvv.is_empty() {
            errors.push(FieldError::new("cvv", "CVV is required"));
        } else if !matches!(form.cvv.len(), 3 | 4) || !form.cvv.chars().all(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new("cvv", "CVV must be 3 or 4 digits"));
        }
    }

    errors
}

/// Places an order from the current cart: validates the form, derives the
/// totals (tax on the discount-inclusive subtotal, free shipping), then
/// clears and persists the cart. No payment is processed.
pub fn place_order(
    cart: &mut CartStore,
    form: &CheckoutForm,
    tax_rate: Decimal,
) -> AppResult<Order> {
    if cart.state().is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let errors = validate(form);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let items: Vec<OrderItem> = cart
        .state()
        .items
        .iter()
        .map(|line| OrderItem {
            product_id: line.product.id,
            name: line.product.name.clone(),
            unit_price: line.product.effective_price(),
            quantity: line.quantity,
        })
        .collect();

    let subtotal = cart.state().total_price;
    let tax = (subtotal * tax_rate).round_dp(2);
    let order = Order {
        order_number: build_order_number(),
        placed_at: Utc::now(),
        items,
        subtotal,
        tax,
        total: subtotal + tax,
    };

    cart.clear();

    tracing::info!(
        order_number = %order.order_number,
        total = %order.total,
        "order placed"
    );
    Ok(order)
}

/// Permissive shape check: local part, `@`, host, `.`, tld, no whitespace.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

fn is_valid_expiry(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'/'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

fn build_order_number() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = Uuid::new_v4().to_string();
    let short = &suffix[..8];
    format!("ORD-{date}-{short}")
}
