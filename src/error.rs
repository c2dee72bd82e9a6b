use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },
    #[error("Selection {start}..{end} is outside the room's availability window")]
    OutOfWindow { start: NaiveDate, end: NaiveDate },
    #[error("{date} is already booked")]
    DateConflict { date: NaiveDate },
    #[error("No signed-in guest")]
    Unauthenticated,
    #[error("Booking rejected: {0}")]
    Submission(String),
    #[error("Booking service error: {0}")]
    Http(#[from] reqwest::Error),
}

impl EngineError {
    /// True for errors worth offering a retry for: the booking service
    /// failed or refused, but the selection itself may still be valid.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Submission(_) | EngineError::Http(_))
    }
}
