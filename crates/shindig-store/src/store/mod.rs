//! The query filter and store contract the feed assembler consumes.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::model::event::StoredEvent;

pub mod memory;

/// Equality filters over stored events, plus the liveness disjunction.
///
/// `live_after` is the instant below which a one-time event's `end` excludes
/// it. Recurring events are always admitted by the filter regardless of their
/// stored window: the stored window alone cannot tell whether a later
/// occurrence is still live, so that decision is deferred to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub organizer_id: Option<uuid::Uuid>,
    pub live_after: Option<DateTime<Utc>>,
}

impl EventFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_sub_region(mut self, sub_region: impl Into<String>) -> Self {
        self.sub_region = Some(sub_region.into());
        self
    }

    #[must_use]
    pub const fn with_organizer(mut self, organizer_id: uuid::Uuid) -> Self {
        self.organizer_id = Some(organizer_id);
        self
    }

    #[must_use]
    pub const fn with_live_after(mut self, now: DateTime<Utc>) -> Self {
        self.live_after = Some(now);
        self
    }

    /// ## Summary
    /// Evaluates the filter against one stored event.
    ///
    /// Every backend implements exactly these semantics, so the method lives
    /// on the filter rather than in any one store.
    #[must_use]
    pub fn matches(&self, event: &StoredEvent) -> bool {
        if let Some(region) = &self.region
            && event.region != *region
        {
            return false;
        }
        if let Some(sub_region) = &self.sub_region
            && event.sub_region.as_deref() != Some(sub_region.as_str())
        {
            return false;
        }
        if let Some(organizer_id) = self.organizer_id
            && event.organizer_id != organizer_id
        {
            return false;
        }
        // "end >= live_after OR the event is recurring"
        if let Some(now) = self.live_after
            && !event.is_recurring()
            && event.window.ended_before(now)
        {
            return false;
        }
        true
    }
}

/// Query contract over stored events.
///
/// `find` returns events ascending by their stored `window.start`, ties
/// broken by id so pagination is deterministic. `count` and `find` evaluate
/// the same filter semantics; read consistency across the two calls is the
/// backend's responsibility.
pub trait EventStore: Send + Sync {
    /// ## Summary
    /// Counts events matching `filter`.
    ///
    /// ## Errors
    /// Returns `StoreError` if the backend fails.
    fn count(&self, filter: &EventFilter) -> impl Future<Output = StoreResult<u64>> + Send;

    /// ## Summary
    /// Returns the `limit`-sized slice of matching events starting at
    /// offset `skip`, ascending by stored `window.start`.
    ///
    /// ## Errors
    /// Returns `StoreError` if the backend fails.
    fn find(
        &self,
        filter: &EventFilter,
        skip: u64,
        limit: u64,
    ) -> impl Future<Output = StoreResult<Vec<StoredEvent>>> + Send;
}
