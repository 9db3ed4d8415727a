use crate::modules::shopping_carts::core::commands::PricedProductItem;
use crate::modules::shopping_carts::core::events::ShoppingCartEvent;
use crate::modules::shopping_carts::core::state::ShoppingCartState;

pub fn evolve(state: ShoppingCartState, event: ShoppingCartEvent) -> ShoppingCartState {
    match (state, event) {
        (ShoppingCartState::NotOpened, ShoppingCartEvent::Opened { .. }) => {
            ShoppingCartState::Opened { items: Vec::new() }
        }
        (ShoppingCartState::Opened { items }, ShoppingCartEvent::ProductItemAdded { item }) => {
            ShoppingCartState::Opened {
                items: add_item(items, item),
            }
        }
        (ShoppingCartState::Opened { items }, ShoppingCartEvent::ProductItemRemoved { item }) => {
            ShoppingCartState::Opened {
                items: remove_item(items, &item),
            }
        }
        (ShoppingCartState::Opened { .. }, ShoppingCartEvent::Confirmed { .. }) => {
            ShoppingCartState::Confirmed
        }
        (ShoppingCartState::Opened { .. }, ShoppingCartEvent::Cancelled { .. }) => {
            ShoppingCartState::Cancelled
        }
        (state, _) => state,
    }
}

fn add_item(
    mut items: Vec<PricedProductItem>,
    item: PricedProductItem,
) -> Vec<PricedProductItem> {
    match items.iter_mut().find(|held| held.matches(&item)) {
        Some(held) => held.quantity += item.quantity,
        None => items.push(item),
    }
    items
}

fn remove_item(
    mut items: Vec<PricedProductItem>,
    item: &PricedProductItem,
) -> Vec<PricedProductItem> {
    if let Some(held) = items.iter_mut().find(|held| held.matches(item)) {
        held.quantity = held.quantity.saturating_sub(item.quantity);
    }
    items.retain(|held| held.quantity > 0);
    items
}

#[cfg(test)]
mod shopping_cart_evolve_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn shoes(quantity: u64) -> PricedProductItem {
        PricedProductItem {
            product_id: "shoes-123".into(),
            quantity,
            unit_price: 100,
        }
    }

    #[fixture]
    fn opened() -> ShoppingCartState {
        evolve(
            ShoppingCartState::NotOpened,
            ShoppingCartEvent::Opened {
                client_id: "client-0001".into(),
                opened_at: 1_700_000_000_000,
            },
        )
    }

    #[rstest]
    fn it_should_open_an_empty_cart(opened: ShoppingCartState) {
        assert_eq!(opened, ShoppingCartState::Opened { items: Vec::new() });
    }

    #[rstest]
    fn it_should_merge_added_items_with_the_same_product_and_price(opened: ShoppingCartState) {
        let state = evolve(opened, ShoppingCartEvent::ProductItemAdded { item: shoes(2) });
        let state = evolve(state, ShoppingCartEvent::ProductItemAdded { item: shoes(3) });
        assert_eq!(
            state,
            ShoppingCartState::Opened {
                items: vec![shoes(5)]
            }
        );
    }

    #[rstest]
    fn it_should_keep_separate_lines_for_different_prices(opened: ShoppingCartState) {
        let discounted = PricedProductItem {
            unit_price: 80,
            ..shoes(1)
        };
        let state = evolve(opened, ShoppingCartEvent::ProductItemAdded { item: shoes(2) });
        let state = evolve(
            state,
            ShoppingCartEvent::ProductItemAdded {
                item: discounted.clone(),
            },
        );
        assert_eq!(
            state,
            ShoppingCartState::Opened {
                items: vec![shoes(2), discounted]
            }
        );
    }

    #[rstest]
    fn it_should_drop_an_item_removed_in_full(opened: ShoppingCartState) {
        let state = evolve(opened, ShoppingCartEvent::ProductItemAdded { item: shoes(2) });
        let state = evolve(state, ShoppingCartEvent::ProductItemRemoved { item: shoes(2) });
        assert_eq!(state, ShoppingCartState::Opened { items: Vec::new() });
    }

    #[rstest]
    fn it_should_keep_the_remainder_of_a_partial_removal(opened: ShoppingCartState) {
        let state = evolve(opened, ShoppingCartEvent::ProductItemAdded { item: shoes(5) });
        let state = evolve(state, ShoppingCartEvent::ProductItemRemoved { item: shoes(2) });
        assert_eq!(
            state,
            ShoppingCartState::Opened {
                items: vec![shoes(3)]
            }
        );
    }

    #[rstest]
    fn it_should_close_the_cart_on_confirm_and_cancel(opened: ShoppingCartState) {
        let confirmed = evolve(
            opened.clone(),
            ShoppingCartEvent::Confirmed {
                confirmed_at: 1_700_000_360_000,
            },
        );
        let cancelled = evolve(
            opened,
            ShoppingCartEvent::Cancelled {
                cancelled_at: 1_700_000_360_000,
            },
        );
        assert_eq!(confirmed, ShoppingCartState::Confirmed);
        assert_eq!(cancelled, ShoppingCartState::Cancelled);
    }

    #[rstest]
    fn it_should_ignore_events_that_do_not_apply_to_the_state() {
        let state = evolve(
            ShoppingCartState::Confirmed,
            ShoppingCartEvent::ProductItemAdded { item: shoes(1) },
        );
        assert_eq!(state, ShoppingCartState::Confirmed, "fallback arm keeps the state");
    }
}
