// Pure decision function for the shopping cart.
//
// Purpose
// - Validate a command against the current state and produce domain events
//   on success.
//
// Responsibilities
// - Enforce rules: a cart opens once, only open carts mutate, removals may
//   not exceed what the cart holds, an empty cart cannot be confirmed.
// - Never perform input or output.

use crate::modules::shopping_carts::core::commands::ShoppingCartCommand;
use crate::modules::shopping_carts::core::events::ShoppingCartEvent;
use crate::modules::shopping_carts::core::state::ShoppingCartState;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("shopping cart already opened")]
    AlreadyOpened,

    #[error("shopping cart is not open")]
    NotOpen,

    #[error("not enough of product {0} in the shopping cart")]
    NotEnoughItems(String),

    #[error("shopping cart is empty")]
    EmptyCart,
}

pub fn decide(
    state: &ShoppingCartState,
    command: ShoppingCartCommand,
) -> Result<Vec<ShoppingCartEvent>, DecideError> {
    match (state, command) {
        (
            ShoppingCartState::NotOpened,
            ShoppingCartCommand::Open { client_id, opened_at },
        ) => Ok(vec![ShoppingCartEvent::Opened { client_id, opened_at }]),
        (_, ShoppingCartCommand::Open { .. }) => Err(DecideError::AlreadyOpened),

        (ShoppingCartState::Opened { .. }, ShoppingCartCommand::AddProductItem { item }) => {
            Ok(vec![ShoppingCartEvent::ProductItemAdded { item }])
        }

        (ShoppingCartState::Opened { items }, ShoppingCartCommand::RemoveProductItem { item }) => {
            let held = items
                .iter()
                .find(|line| line.matches(&item))
                .map(|line| line.quantity)
                .unwrap_or(0);
            if held < item.quantity {
                return Err(DecideError::NotEnoughItems(item.product_id));
            }
            Ok(vec![ShoppingCartEvent::ProductItemRemoved { item }])
        }

        (ShoppingCartState::Opened { items }, ShoppingCartCommand::Confirm { confirmed_at }) => {
            if items.is_empty() {
                return Err(DecideError::EmptyCart);
            }
            Ok(vec![ShoppingCartEvent::Confirmed { confirmed_at }])
        }

        (ShoppingCartState::Opened { .. }, ShoppingCartCommand::Cancel { cancelled_at }) => {
            Ok(vec![ShoppingCartEvent::Cancelled { cancelled_at }])
        }

        (_, _) => Err(DecideError::NotOpen),
    }
}
