use async_trait::async_trait;
use thiserror::Error;

use crate::shared::core::primitives::{ExpectedVersion, StreamVersion};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch {
        expected: ExpectedVersion,
        actual: ExpectedVersion,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    /// `None` when no events have ever been appended to the stream.
    pub version: Option<StreamVersion>,
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;

    /// Appends all events or none. The expected-version check and the write
    /// must happen as one operation on the store side; callers may have
    /// checked already, but only this check decides. Returns the stream
    /// version after the append.
    async fn append(
        &self,
        stream_id: &str,
        expected: ExpectedVersion,
        new_events: &[Event],
    ) -> Result<StreamVersion, EventStoreError>;
}

pub mod in_memory;
