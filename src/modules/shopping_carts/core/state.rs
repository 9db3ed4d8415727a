use crate::modules::shopping_carts::core::commands::PricedProductItem;

/// Confirmed and Cancelled are terminal: the decider rejects every further
/// command against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingCartState {
    NotOpened,
    Opened { items: Vec<PricedProductItem> },
    Confirmed,
    Cancelled,
}
