use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid slot duration: {0} minutes")]
    InvalidSlotDuration(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}
