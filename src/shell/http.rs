use axum::{
    Router,
    routing::{delete, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::shopping_carts::adapters::inbound::http as carts_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/clients/{client_id}/shopping-carts",
            post(carts_http::open),
        )
        .route(
            "/clients/{client_id}/shopping-carts/{shopping_cart_id}/product-items",
            post(carts_http::add_product_item).delete(carts_http::remove_product_item),
        )
        .route(
            "/clients/{client_id}/shopping-carts/{shopping_cart_id}/confirm",
            post(carts_http::confirm),
        )
        .route(
            "/clients/{client_id}/shopping-carts/{shopping_cart_id}",
            delete(carts_http::cancel),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
