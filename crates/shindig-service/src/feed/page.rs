//! The values a feed consumer receives.

use serde::{Deserialize, Serialize};
use shindig_schedule::EventWindow;
use shindig_store::model::event::StoredEvent;

/// A stored event as displayed in a feed: the same attributes, with the
/// window replaced by the resolved occurrence for recurring series.
///
/// Transient - recomputed on every feed request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    pub id: uuid::Uuid,
    pub organizer_id: uuid::Uuid,
    pub title: String,
    pub venue: Option<String>,
    pub region: String,
    pub sub_region: Option<String>,
    pub is_recurring: bool,
    pub window: EventWindow,
}

impl ResolvedEvent {
    /// Builds the display value from a stored event and the window to show,
    /// which is the stored window for one-time events and the next live
    /// occurrence for recurring series.
    #[must_use]
    pub fn from_stored(event: StoredEvent, window: EventWindow) -> Self {
        Self {
            id: event.id,
            organizer_id: event.organizer_id,
            title: event.title,
            venue: event.venue,
            region: event.region,
            sub_region: event.sub_region,
            is_recurring: event.recurrence.is_some(),
            window,
        }
    }
}

/// One page of a feed.
///
/// `total_matched` and the metadata derived from it come from the store-level
/// count of the pre-projection query; recurring events that later resolve to
/// nothing still count. Pages can therefore hold fewer than `page_size`
/// items while `has_next` is true. Dropped items are not backfilled from the
/// next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    pub items: Vec<ResolvedEvent>,
    pub page: u32,
    pub page_size: u32,
    pub total_matched: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl FeedPage {
    /// Assembles a page, deriving the pagination metadata from the
    /// store-level match count.
    #[must_use]
    pub fn new(items: Vec<ResolvedEvent>, page: u32, page_size: u32, total_matched: u64) -> Self {
        let total_pages = total_matched.div_ceil(u64::from(page_size.max(1)));
        Self {
            items,
            page,
            page_size,
            total_matched,
            total_pages,
            has_next: u64::from(page) < total_pages,
            has_previous: page > 1,
        }
    }
}
