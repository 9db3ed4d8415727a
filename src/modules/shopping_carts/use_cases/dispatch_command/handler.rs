use std::sync::Arc;

use thiserror::Error;

use crate::modules::shopping_carts::core::commands::ShoppingCartCommand;
use crate::modules::shopping_carts::core::decide::{DecideError, decide};
use crate::modules::shopping_carts::core::events::ShoppingCartEvent;
use crate::modules::shopping_carts::core::evolve::evolve;
use crate::modules::shopping_carts::core::state::ShoppingCartState;
use crate::shared::core::primitives::{ExpectedVersion, StreamVersion};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("concurrency conflict: {0}")]
    Conflict(EventStoreError),

    #[error("store unavailable: {0}")]
    Store(EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<EventStoreError> for DispatchError {
    fn from(err: EventStoreError) -> Self {
        match err {
            EventStoreError::VersionMismatch { .. } => DispatchError::Conflict(err),
            EventStoreError::Backend(_) => DispatchError::Store(err),
        }
    }
}

/// Outcome of a successful dispatch: the stream written to and its version
/// afterwards. Created fresh per dispatch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub stream_id: String,
    pub version: StreamVersion,
}

/// The decision-logic collaborator: pure, may reject with a business-rule
/// error, and its rejections pass through dispatch unchanged.
pub type DecideFn =
    fn(&ShoppingCartState, ShoppingCartCommand) -> Result<Vec<ShoppingCartEvent>, DecideError>;

pub struct CommandDispatcher<TEventStore>
where
    TEventStore: EventStore<ShoppingCartEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    decider: DecideFn,
}

impl<TEventStore> CommandDispatcher<TEventStore>
where
    TEventStore: EventStore<ShoppingCartEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self::with_decider(event_store, decide)
    }

    pub fn with_decider(event_store: Arc<TEventStore>, decider: DecideFn) -> Self {
        Self {
            event_store,
            decider,
        }
    }

    /// Loads the stream, folds its state, runs the decider and appends the
    /// resulting events conditioned on `expected`. At most one of two
    /// dispatchers racing on the same expected version wins; the loser gets
    /// `DispatchError::Conflict` and is never retried here.
    pub async fn dispatch(
        &self,
        stream_id: &str,
        command: ShoppingCartCommand,
        expected: ExpectedVersion,
    ) -> Result<DispatchResult, DispatchError> {
        let stream = self.event_store.load(stream_id).await?;
        let current = stream.version;

        // Early reject of stale writes; the store repeats this check under
        // its own lock at append time and that check is the one that counts.
        if !expected.matches(current) {
            tracing::debug!(stream_id, %expected, "stale precondition rejected");
            return Err(DispatchError::Conflict(EventStoreError::VersionMismatch {
                expected,
                actual: current.into(),
            }));
        }

        let state = stream
            .events
            .into_iter()
            .fold(ShoppingCartState::NotOpened, evolve);
        let events = (self.decider)(&state, command)?;

        if events.is_empty() {
            return match current {
                Some(version) => Ok(DispatchResult {
                    stream_id: stream_id.to_string(),
                    version,
                }),
                None => Err(DispatchError::Unexpected(
                    "creation decided no events".into(),
                )),
            };
        }

        let version = self.event_store.append(stream_id, expected, &events).await?;

        Ok(DispatchResult {
            stream_id: stream_id.to_string(),
            version,
        })
    }
}
