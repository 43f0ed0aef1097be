//! The time extent of one concrete event occurrence.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Time window of a single occurrence, both ends inclusive.
///
/// All instants live on the platform's single UTC clock; timezone handling
/// is out of scope for the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventWindow {
    /// ## Summary
    /// Creates a window, enforcing that it ends after it starts.
    ///
    /// ## Errors
    /// Returns `ScheduleError::EmptyWindow` if `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleResult<Self> {
        if end <= start {
            return Err(ScheduleError::EmptyWindow);
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the window is entirely in the past at `now`.
    /// A window whose `end` equals `now` is still live.
    #[must_use]
    pub fn ended_before(&self, now: DateTime<Utc>) -> bool {
        self.end < now
    }
}
