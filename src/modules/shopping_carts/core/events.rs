use serde::{Deserialize, Serialize};

use crate::modules::shopping_carts::core::commands::PricedProductItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShoppingCartEvent {
    Opened { client_id: String, opened_at: i64 },
    ProductItemAdded { item: PricedProductItem },
    ProductItemRemoved { item: PricedProductItem },
    Confirmed { confirmed_at: i64 },
    Cancelled { cancelled_at: i64 },
}
