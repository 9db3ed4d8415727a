use serde::{Deserialize, Serialize};

/// A product selection as sent by the client, before the catalogue priced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub product_id: String,
    pub quantity: u64,
}

/// A product selection carrying the unit price (minor currency units) the
/// catalogue quoted for it. Cart contents match on (product_id, unit_price):
/// the same product at two prices is held as two lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedProductItem {
    pub product_id: String,
    pub quantity: u64,
    pub unit_price: u64,
}

impl PricedProductItem {
    pub fn matches(&self, other: &PricedProductItem) -> bool {
        self.product_id == other.product_id && self.unit_price == other.unit_price
    }
}

/// One command per request; timestamps are epoch millis stamped at the
/// transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingCartCommand {
    Open { client_id: String, opened_at: i64 },
    AddProductItem { item: PricedProductItem },
    RemoveProductItem { item: PricedProductItem },
    Confirm { confirmed_at: i64 },
    Cancel { cancelled_at: i64 },
}
