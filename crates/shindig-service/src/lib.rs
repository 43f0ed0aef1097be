//! Feed assembly over the event store: time-windowed filtering, projection
//! of recurring events to their next live occurrence, and pagination.

pub mod error;
pub mod feed;
