//! Shindig event-listing core - integration test support.
//!
//! Re-exports the workspace crates under `shindig::` paths and provides
//! shared fixtures for feed tests.

pub use shindig_schedule as schedule;
pub use shindig_service as service;
pub use shindig_store as store;

// Re-export configuration and constants from the core crate
pub mod config {
    pub use shindig_core::config::*;
    pub use shindig_core::constants;
}

pub mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use shindig_schedule::{EventWindow, RecurrenceRule};
    use shindig_store::model::event::StoredEvent;

    /// Fixed reference clock for deterministic resolution:
    /// 2024-06-15T00:00:00Z.
    #[must_use]
    pub fn reference_now() -> DateTime<Utc> {
        dt(2024, 6, 15, 0)
    }

    /// ## Panics
    /// Panics if the components do not form a valid UTC datetime.
    #[must_use]
    pub fn dt(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("valid fixture datetime")
    }

    /// Four-hour evening party in `region`, optionally recurring.
    ///
    /// ## Panics
    /// Panics if `start` is at the edge of the representable range.
    #[must_use]
    pub fn party(
        title: &str,
        region: &str,
        start: DateTime<Utc>,
        recurrence: Option<RecurrenceRule>,
    ) -> StoredEvent {
        StoredEvent {
            id: uuid::Uuid::new_v4(),
            organizer_id: uuid::Uuid::new_v4(),
            title: title.to_string(),
            venue: None,
            region: region.to_string(),
            sub_region: None,
            window: EventWindow::new(start, start + chrono::TimeDelta::hours(4))
                .expect("valid fixture window"),
            recurrence,
            created_at: dt(2024, 1, 1, 0),
        }
    }

    /// Same as [`party`] but pinned to an organizer.
    #[must_use]
    pub fn organizer_party(
        title: &str,
        region: &str,
        organizer_id: uuid::Uuid,
        start: DateTime<Utc>,
    ) -> StoredEvent {
        StoredEvent {
            organizer_id,
            ..party(title, region, start, None)
        }
    }
}
