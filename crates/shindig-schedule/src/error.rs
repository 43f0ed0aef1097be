use thiserror::Error;

/// Recurrence configuration and resolution errors.
///
/// All variants are data-integrity problems with a stored event, not
/// transient faults.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Recurrence interval must be at least 1, got {0}")]
    InvalidInterval(u32),

    #[error("Recurrence count must be at least 1, got {0}")]
    InvalidCount(u32),

    #[error("Unknown recurrence pattern: {0}")]
    UnknownPattern(String),

    #[error("Event window must end after it starts")]
    EmptyWindow,

    #[error("Recurrence stepped past the representable time range")]
    TimeOverflow,
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
