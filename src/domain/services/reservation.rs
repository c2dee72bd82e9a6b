use crate::domain::models::booking::{BookingRequest, Guest, PricingResult};
use crate::domain::models::interval::DateInterval;
use crate::domain::models::room::{AvailabilityWindow, Room};
use crate::domain::services::blocked_set::BlockedSet;
use crate::error::EngineError;
use tracing::warn;
use uuid::Uuid;

/// Checks a guest's selection against the room window and the blocked set.
/// Returns the selection unchanged when it is a bookable range.
pub fn validate_selection(
    selection: &DateInterval,
    window: &AvailabilityWindow,
    blocked: &BlockedSet,
) -> Result<DateInterval, EngineError> {
    if !window.encloses(selection) {
        warn!(
            selection_start = %selection.start(),
            selection_end = %selection.end(),
            window_start = %window.start(),
            window_end = %window.end(),
            "selection outside availability window"
        );
        return Err(EngineError::OutOfWindow {
            start: selection.start(),
            end: selection.end(),
        });
    }

    if let Some(date) = selection.days().find(|d| blocked.is_blocked(*d)) {
        warn!(%date, "selection conflicts with an existing booking");
        return Err(EngineError::DateConflict { date });
    }

    Ok(*selection)
}

/// Nightly pricing for a selected range. A same-day selection is billed as
/// a one-night stay. No currency rounding is applied.
pub fn price(selection: &DateInterval, nightly_rate: f64) -> PricingResult {
    let nights = selection.nights();
    PricingResult {
        nights,
        total: nights as f64 * nightly_rate,
    }
}

/// Assembles the submission payload for one reservation attempt. The only
/// precondition checked here is a signed-in guest; the selection is
/// expected to have passed `validate_selection` already.
pub fn build_request(
    room: &Room,
    guest: Option<&Guest>,
    selection: &DateInterval,
    pricing: &PricingResult,
) -> Result<BookingRequest, EngineError> {
    let guest = guest.ok_or(EngineError::Unauthenticated)?;

    Ok(BookingRequest {
        id: Uuid::new_v4(),
        room_id: room.id.clone(),
        guest: guest.clone(),
        stay: *selection,
        total: pricing.total,
    })
}
