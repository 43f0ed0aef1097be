use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] shindig_store::error::StoreError),

    #[error(transparent)]
    ScheduleError(#[from] shindig_schedule::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] shindig_core::error::CoreError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
