use serde::{Deserialize, Serialize};
use shindig_schedule::{EventWindow, RecurrenceRule};

/// A stored event as authored by its organizer.
///
/// For recurring events `window` is the canonical original window; it is
/// never rewritten once later occurrences begin to apply. All forward
/// projection happens on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub id: uuid::Uuid,
    pub organizer_id: uuid::Uuid,
    pub title: String,
    pub venue: Option<String>,
    pub region: String,
    pub sub_region: Option<String>,
    pub window: EventWindow,
    pub recurrence: Option<RecurrenceRule>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl StoredEvent {
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}
