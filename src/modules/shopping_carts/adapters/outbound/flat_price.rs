use crate::modules::shopping_carts::core::pricing::ProductPriceProvider;

/// Prices every product at the same configured value. Stand-in for a real
/// catalogue adapter.
pub struct FlatPriceProvider {
    unit_price: u64,
}

impl FlatPriceProvider {
    pub fn new(unit_price: u64) -> Self {
        Self { unit_price }
    }
}

impl ProductPriceProvider for FlatPriceProvider {
    fn price_of(&self, _product_id: &str) -> u64 {
        self.unit_price
    }
}
