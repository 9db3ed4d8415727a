/// Catalogue lookup for the unit price of a product, in minor currency
/// units. The cart treats pricing as an external collaborator; real
/// implementations would go to a catalogue service.
pub trait ProductPriceProvider {
    fn price_of(&self, product_id: &str) -> u64;
}
