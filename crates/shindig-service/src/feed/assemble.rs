//! Feed assembly: fetch a page of stored events, project recurring series
//! to their next live occurrence, and attach pagination metadata.

use chrono::{DateTime, Utc};
use shindig_schedule::resolve_next_occurrence;
use shindig_store::store::EventStore;

use crate::error::{ServiceError, ServiceResult};
use crate::feed::page::{FeedPage, ResolvedEvent};
use crate::feed::query::{FeedQuery, Pagination};

/// ## Summary
/// Produces the feed page for `query` at the injected instant `now`.
///
/// One-time events already over are dropped (unless past events were
/// requested); recurring events are shown at their next live occurrence or
/// dropped once the series is exhausted. Surviving items keep the store's
/// stored-`start` ordering. Dropped items shrink the page below `page_size`;
/// there is no backfill from the next page.
///
/// ## Side Effects
/// Issues one `count` and one `find` against the store; nothing else.
///
/// ## Errors
/// Returns `ValidationError` for a zero page or page size, propagates store
/// failures unchanged, and surfaces `ScheduleError` for events stored with
/// an invalid recurrence rule (a data-integrity problem, not a feed state).
pub async fn assemble_feed<S: EventStore>(
    store: &S,
    query: &FeedQuery,
    now: DateTime<Utc>,
    pagination: Pagination,
) -> ServiceResult<FeedPage> {
    if pagination.page == 0 || pagination.page_size == 0 {
        return Err(ServiceError::ValidationError(format!(
            "page and page_size must be at least 1, got page={} page_size={}",
            pagination.page, pagination.page_size
        )));
    }

    let filter = query.to_filter(now);
    let total_matched = store.count(&filter).await?;
    let stored = store
        .find(&filter, pagination.skip(), u64::from(pagination.page_size))
        .await?;
    tracing::debug!(
        total_matched,
        fetched = stored.len(),
        page = pagination.page,
        "assembling feed page"
    );

    let mut items = Vec::with_capacity(stored.len());
    for event in stored {
        match &event.recurrence {
            None => {
                if !query.include_past && event.window.ended_before(now) {
                    continue;
                }
                let window = event.window;
                items.push(ResolvedEvent::from_stored(event, window));
            }
            Some(rule) => match resolve_next_occurrence(&event.window, rule, now)? {
                Some(window) => items.push(ResolvedEvent::from_stored(event, window)),
                None => {
                    tracing::trace!(event_id = %event.id, "dropping exhausted series");
                }
            },
        }
    }

    Ok(FeedPage::new(
        items,
        pagination.page,
        pagination.page_size,
        total_matched,
    ))
}
