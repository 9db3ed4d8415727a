use std::sync::Arc;

use crate::modules::shopping_carts::core::events::ShoppingCartEvent;
use crate::modules::shopping_carts::core::pricing::ProductPriceProvider;
use crate::modules::shopping_carts::use_cases::dispatch_command::handler::CommandDispatcher;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<CommandDispatcher<InMemoryEventStore<ShoppingCartEvent>>>,
    pub prices: Arc<dyn ProductPriceProvider + Send + Sync>,
}
