use crate::domain::models::interval::DateInterval;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed booking's date range, as fetched for a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedInterval {
    pub booking_id: String,
    pub range: DateInterval,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
}

/// Derived from the current selection and the room's nightly rate.
/// Recomputed on every selection change, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub nights: i64,
    pub total: f64,
}

/// The immutable payload of one reservation attempt. Built on "reserve",
/// discarded once submission resolves.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub room_id: String,
    pub guest: Guest,
    pub stay: DateInterval,
    pub total: f64,
}

/// Returned by the booking service when a submission is accepted.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub message: String,
}
