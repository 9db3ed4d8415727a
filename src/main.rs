use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use shopping_carts::modules::shopping_carts::adapters::outbound::flat_price::FlatPriceProvider;
use shopping_carts::modules::shopping_carts::core::events::ShoppingCartEvent;
use shopping_carts::modules::shopping_carts::core::pricing::ProductPriceProvider;
use shopping_carts::modules::shopping_carts::use_cases::dispatch_command::handler::CommandDispatcher;
use shopping_carts::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use shopping_carts::shell::config::Config;
use shopping_carts::shell::http::router;
use shopping_carts::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory store for now; swap behind the EventStore port.
    let event_store = Arc::new(InMemoryEventStore::<ShoppingCartEvent>::new());
    let dispatcher = Arc::new(CommandDispatcher::new(event_store));
    let prices: Arc<dyn ProductPriceProvider + Send + Sync> =
        Arc::new(FlatPriceProvider::new(config.unit_price));

    let app = router(AppState { dispatcher, prices });

    tracing::info!("shopping carts API listening on http://{}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
