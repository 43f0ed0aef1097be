//! Pure recurrence logic for the shindig event platform.
//!
//! Everything in this crate is a deterministic function of its inputs and an
//! explicitly injected `now`; there is no I/O and no system-clock access.

pub mod error;
pub mod schedule;

pub use error::{ScheduleError, ScheduleResult};
pub use schedule::resolve::resolve_next_occurrence;
pub use schedule::rule::{EndPolicy, RecurrencePattern, RecurrenceRule};
pub use schedule::window::EventWindow;
