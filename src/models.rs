use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable product. Defined at build time and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    #[serde(rename = "discount")]
    pub discount_pct: u8,
    pub image: String,
    pub description: String,
    pub rating: f32,
    pub reviews: u32,
    pub stock: u32,
    pub features: Vec<String>,
    #[serde(rename = "relatedProducts")]
    pub related: Vec<u32>,
}

impl Product {
    /// Discount-inclusive unit price, rounded to cents. Used uniformly for
    /// line totals, cart totals and the checkout tax base. A hydrated
    /// snapshot may carry an out-of-range discount; it is clamped to 100%
    /// so price math can never underflow.
    pub fn effective_price(&self) -> Decimal {
        let pct = Decimal::from(100 - u32::from(self.discount_pct.min(100)));
        (self.price * pct / Decimal::from(100)).round_dp(2)
    }
}

/// One product entry in the cart. Holds a full snapshot of the product as it
/// was when first added, plus the quantity (always >= 1; a line that would
/// drop to zero is removed instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.effective_price() * Decimal::from(self.quantity)
    }
}

/// Full cart snapshot: line items in insertion order plus derived totals.
/// Totals are always the exact fold of the current items; they are recomputed
/// after every mutation, never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartLine>,
    pub total_items: u32,
    pub total_price: Decimal,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Mock session marker. No credentials are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u32,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// UI language. A closed set, so unknown codes cannot be stored at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ta" => Some(Language::Ta),
            _ => None,
        }
    }
}
