//! In-memory `EventStore` used by tests and local development.

use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::model::event::StoredEvent;
use crate::store::{EventFilter, EventStore};

/// Vec-backed store with the exact filter/sort/skip/limit semantics of the
/// `EventStore` contract.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<StoredEvent>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, event: StoredEvent) {
        self.events.write().await.push(event);
    }

    pub async fn insert_all(&self, events: impl IntoIterator<Item = StoredEvent>) {
        self.events.write().await.extend(events);
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

impl EventStore for MemoryEventStore {
    async fn count(&self, filter: &EventFilter) -> StoreResult<u64> {
        let events = self.events.read().await;
        let matched: u64 = events
            .iter()
            .map(|event| u64::from(filter.matches(event)))
            .sum();
        Ok(matched)
    }

    async fn find(
        &self,
        filter: &EventFilter,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<StoredEvent>> {
        let events = self.events.read().await;
        let mut matched: Vec<StoredEvent> = events
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.window
                .start
                .cmp(&b.window.start)
                .then_with(|| a.id.cmp(&b.id))
        });

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }
}
