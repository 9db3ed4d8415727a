use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, header},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::shopping_carts::adapters::inbound::respond::{
    ApiError, CommandAck, OperationKind, project,
};
use crate::modules::shopping_carts::core::commands::{PricedProductItem, ShoppingCartCommand};
use crate::shared::core::etag::{self, ETagError};
use crate::shared::core::primitives::ExpectedVersion;
use crate::shared::core::validation::{require_non_empty_string, require_positive_number};
use crate::shell::state::AppState;

fn stream_id(shopping_cart_id: &str) -> String {
    format!("shopping_cart-{shopping_cart_id}")
}

/// Reads the weak validator from If-Match. Every mutating route requires it;
/// the open route never reads it.
fn expected_version(headers: &HeaderMap) -> Result<ExpectedVersion, ETagError> {
    let raw = headers
        .get(header::IF_MATCH)
        .ok_or(ETagError::MissingPrecondition("If-Match"))?;
    let token = raw
        .to_str()
        .map_err(|_| ETagError::InvalidToken("<non-ascii header value>".into()))?;
    Ok(ExpectedVersion::Exact(etag::decode(token)?))
}

// Open shopping cart. One cart per client: the cart id is the client id, so
// opening twice lands on the same stream and the second attempt conflicts.
pub async fn open(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<CommandAck, ApiError> {
    let client_id = require_non_empty_string("client_id", &client_id)?;
    let shopping_cart_id = client_id.clone();

    let command = ShoppingCartCommand::Open {
        client_id,
        opened_at: Utc::now().timestamp_millis(),
    };
    let result = state
        .dispatcher
        .dispatch(
            &stream_id(&shopping_cart_id),
            command,
            ExpectedVersion::NoStream,
        )
        .await?;

    Ok(project(OperationKind::Create, &shopping_cart_id, &result))
}

#[derive(Deserialize)]
pub struct AddProductItemBody {
    pub product_id: String,
    pub quantity: i64,
}

pub async fn add_product_item(
    State(state): State<AppState>,
    Path((_client_id, shopping_cart_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<AddProductItemBody>,
) -> Result<CommandAck, ApiError> {
    let shopping_cart_id = require_non_empty_string("shopping_cart_id", &shopping_cart_id)?;
    let product_id = require_non_empty_string("product_id", &body.product_id)?;
    let quantity = require_positive_number("quantity", body.quantity)?;
    let unit_price = state.prices.price_of(&product_id);
    let expected = expected_version(&headers)?;

    let command = ShoppingCartCommand::AddProductItem {
        item: PricedProductItem {
            product_id,
            quantity,
            unit_price,
        },
    };
    let result = state
        .dispatcher
        .dispatch(&stream_id(&shopping_cart_id), command, expected)
        .await?;

    Ok(project(OperationKind::Mutate, &shopping_cart_id, &result))
}

#[derive(Deserialize)]
pub struct RemoveProductItemQuery {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price: i64,
}

pub async fn remove_product_item(
    State(state): State<AppState>,
    Path((_client_id, shopping_cart_id)): Path<(String, String)>,
    Query(query): Query<RemoveProductItemQuery>,
    headers: HeaderMap,
) -> Result<CommandAck, ApiError> {
    let shopping_cart_id = require_non_empty_string("shopping_cart_id", &shopping_cart_id)?;
    let item = PricedProductItem {
        product_id: require_non_empty_string("product_id", &query.product_id)?,
        quantity: require_positive_number("quantity", query.quantity)?,
        unit_price: require_positive_number("unit_price", query.unit_price)?,
    };
    let expected = expected_version(&headers)?;

    let result = state
        .dispatcher
        .dispatch(
            &stream_id(&shopping_cart_id),
            ShoppingCartCommand::RemoveProductItem { item },
            expected,
        )
        .await?;

    Ok(project(OperationKind::Mutate, &shopping_cart_id, &result))
}

pub async fn confirm(
    State(state): State<AppState>,
    Path((_client_id, shopping_cart_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<CommandAck, ApiError> {
    let shopping_cart_id = require_non_empty_string("shopping_cart_id", &shopping_cart_id)?;
    let expected = expected_version(&headers)?;

    let command = ShoppingCartCommand::Confirm {
        confirmed_at: Utc::now().timestamp_millis(),
    };
    let result = state
        .dispatcher
        .dispatch(&stream_id(&shopping_cart_id), command, expected)
        .await?;

    Ok(project(OperationKind::Mutate, &shopping_cart_id, &result))
}

pub async fn cancel(
    State(state): State<AppState>,
    Path((_client_id, shopping_cart_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<CommandAck, ApiError> {
    let shopping_cart_id = require_non_empty_string("shopping_cart_id", &shopping_cart_id)?;
    let expected = expected_version(&headers)?;

    let command = ShoppingCartCommand::Cancel {
        cancelled_at: Utc::now().timestamp_millis(),
    };
    let result = state
        .dispatcher
        .dispatch(&stream_id(&shopping_cart_id), command, expected)
        .await?;

    Ok(project(OperationKind::Mutate, &shopping_cart_id, &result))
}
