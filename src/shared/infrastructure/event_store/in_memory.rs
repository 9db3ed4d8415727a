// In memory implementation of the EventStore port.
//
// Purpose
// - Support command handler tests and local development without a database.
//
// Responsibilities
// - Store events per stream in memory.
// - Enforce optimistic concurrency by checking the expected version under
//   the same write lock as the append.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::shared::core::primitives::{ExpectedVersion, StreamVersion};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<HashMap<String, Vec<Event>>>,
    offline: AtomicBool,
    append_delay_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: AtomicBool::new(false),
            append_delay_ms: AtomicU64::new(0),
        }
    }

    /// Flips the store between reachable and unreachable, for
    /// infrastructure-failure tests.
    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Sleeps before the conditional append, to widen race windows in
    /// concurrency tests.
    pub fn set_append_delay_ms(&self, delay: u64) {
        self.append_delay_ms.store(delay, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(EventStoreError::Backend("event store offline".into()));
        }
        Ok(())
    }
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

fn last_position(len: usize) -> Option<StreamVersion> {
    len.checked_sub(1).map(|index| index as StreamVersion)
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let events = guard.get(stream_id).cloned().unwrap_or_default();
        let version = last_position(events.len());
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected: ExpectedVersion,
        new_events: &[Event],
    ) -> Result<StreamVersion, EventStoreError> {
        self.ensure_online()?;
        let delay = self.append_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let entry = guard.entry(stream_id.to_string()).or_default();
        let actual = last_position(entry.len());
        if !expected.matches(actual) {
            return Err(EventStoreError::VersionMismatch {
                expected,
                actual: actual.into(),
            });
        }
        entry.extend_from_slice(new_events);
        last_position(entry.len())
            .ok_or_else(|| EventStoreError::Backend("appended an empty batch".into()))
    }
}

#[cfg(test)]
mod in_memory_event_store_tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct DomainEvent {
        event_type: &'static str,
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_and_load_an_event() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let version = store
            .append("1", ExpectedVersion::NoStream, &[DomainEvent { event_type: "test" }])
            .await
            .expect("expected to append to the event store");
        assert_eq!(version, 0);
        let stream = store
            .load("1")
            .await
            .expect("expected to load from the event store");
        assert_eq!(stream.version, Some(0));
        assert_eq!(stream.events, vec![DomainEvent { event_type: "test" }]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_and_load_multiple_events() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let events = vec![
            DomainEvent { event_type: "test_1" },
            DomainEvent { event_type: "test_2" },
            DomainEvent { event_type: "test_3" },
        ];
        let version = store
            .append("1", ExpectedVersion::NoStream, &events)
            .await
            .expect("expected to append to the event store");
        assert_eq!(version, 2);
        let stream = store
            .load("1")
            .await
            .expect("expected to load from the event store");
        assert_eq!(stream.version, Some(2));
        assert_eq!(stream.events, events);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_stream_as_having_no_version() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let stream = store.load("missing").await.expect("load failed");
        assert_eq!(stream.version, None);
        assert!(stream.events.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_append_if_the_wrong_version_is_expected() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let result = store
            .append("1", ExpectedVersion::Exact(1), &[DomainEvent { event_type: "test" }])
            .await;
        assert_eq!(
            result,
            Err(EventStoreError::VersionMismatch {
                expected: ExpectedVersion::Exact(1),
                actual: ExpectedVersion::NoStream,
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_append_to_an_existing_stream_when_none_is_expected() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        store
            .append("1", ExpectedVersion::NoStream, &[DomainEvent { event_type: "first" }])
            .await
            .expect("seed append failed");
        let result = store
            .append("1", ExpectedVersion::NoStream, &[DomainEvent { event_type: "second" }])
            .await;
        assert_eq!(
            result,
            Err(EventStoreError::VersionMismatch {
                expected: ExpectedVersion::NoStream,
                actual: ExpectedVersion::Exact(0),
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_call_while_offline() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        store.toggle_offline();
        let load = store.load("1").await;
        let append = store
            .append("1", ExpectedVersion::NoStream, &[DomainEvent { event_type: "test" }])
            .await;
        assert_eq!(
            load.unwrap_err(),
            EventStoreError::Backend("event store offline".into())
        );
        assert_eq!(
            append.unwrap_err(),
            EventStoreError::Backend("event store offline".into())
        );
    }
}
