use crate::domain::models::booking::{Confirmation, Guest, PricingResult};
use crate::domain::models::interval::DateInterval;
use crate::domain::models::room::Room;
use crate::domain::ports::BookingGateway;
use crate::domain::services::availability;
use crate::domain::services::blocked_set::BlockedSet;
use crate::domain::services::reservation;
use crate::error::EngineError;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// One guest's booking-in-progress for one room.
///
/// Holds the room window, the blocked set derived from fetched bookings,
/// and the current picker selection. Everything except `open`, `refresh`
/// and `reserve` is synchronous in-memory computation; `&mut self` on
/// `reserve` serializes attempts within a session, and `reserve` refetches
/// bookings before validating so a stale availability view is never
/// submitted against.
pub struct ReservationSession {
    gateway: Arc<dyn BookingGateway>,
    room: Room,
    guest: Option<Guest>,
    blocked: BlockedSet,
    selection: DateInterval,
}

impl ReservationSession {
    pub async fn open(
        gateway: Arc<dyn BookingGateway>,
        room: Room,
        guest: Option<Guest>,
        today: NaiveDate,
    ) -> Result<Self, EngineError> {
        let bookings = gateway.fetch_bookings(&room.id).await?;
        let blocked = BlockedSet::build(&bookings);
        let selection = availability::default_selection(&room.availability, &blocked, today);

        info!(room_id = %room.id, bookings = bookings.len(), "reservation session opened");

        Ok(Self {
            gateway,
            room,
            guest,
            blocked,
            selection,
        })
    }

    /// Refetches the room's bookings and rebuilds the blocked set. The
    /// booking list is the source of truth; this runs after every
    /// successful reservation as well.
    pub async fn refresh(&mut self) -> Result<(), EngineError> {
        let bookings = self.gateway.fetch_bookings(&self.room.id).await?;
        self.blocked = BlockedSet::build(&bookings);
        Ok(())
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn selection(&self) -> &DateInterval {
        &self.selection
    }

    pub fn blocked(&self) -> &BlockedSet {
        &self.blocked
    }

    pub fn disabled_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        availability::disabled_dates(&self.room.availability, &self.blocked)
    }

    pub fn is_fully_booked(&self) -> bool {
        availability::is_fully_booked(&self.room.availability, &self.blocked)
    }

    /// Applies a picker selection. The range is clamped into the room
    /// window (mirroring the picker's min/max bounds) and then checked
    /// against the blocked set; on rejection the previous selection is
    /// kept.
    pub fn select(&mut self, range: DateInterval) -> Result<(), EngineError> {
        let clamped = range
            .clamp_to(self.room.availability.span())
            .ok_or(EngineError::OutOfWindow {
                start: range.start(),
                end: range.end(),
            })?;

        self.selection =
            reservation::validate_selection(&clamped, &self.room.availability, &self.blocked)?;
        Ok(())
    }

    /// Pricing for the current selection at the room's nightly rate.
    pub fn quote(&self) -> PricingResult {
        reservation::price(&self.selection, self.room.price)
    }

    /// Runs one reservation attempt end to end: refresh the blocked set,
    /// re-validate the selection fail-closed, price it, build the request
    /// and submit. On failure the selection is preserved so the guest can
    /// retry; on success the blocked set is refreshed to include the new
    /// booking.
    pub async fn reserve(&mut self) -> Result<Confirmation, EngineError> {
        self.refresh().await?;

        let selection =
            reservation::validate_selection(&self.selection, &self.room.availability, &self.blocked)?;
        let pricing = reservation::price(&selection, self.room.price);
        let request =
            reservation::build_request(&self.room, self.guest.as_ref(), &selection, &pricing)?;

        info!(
            room_id = %self.room.id,
            request_id = %request.id,
            nights = pricing.nights,
            total = pricing.total,
            "submitting reservation"
        );

        let confirmation = self.gateway.submit(&request).await?;
        self.refresh().await?;

        Ok(confirmation)
    }
}
