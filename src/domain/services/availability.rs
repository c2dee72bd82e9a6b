use crate::domain::models::interval::DateInterval;
use crate::domain::models::room::AvailabilityWindow;
use crate::domain::services::blocked_set::BlockedSet;
use chrono::NaiveDate;

/// Every day of the window that is already booked, in order. Drives the
/// date picker's disabled-day rendering; lazy and restartable, so the UI
/// may re-enumerate on every render.
pub fn disabled_dates<'a>(
    window: &AvailabilityWindow,
    blocked: &'a BlockedSet,
) -> impl Iterator<Item = NaiveDate> + 'a {
    window.days().filter(move |d| blocked.is_blocked(*d))
}

/// True when no day of the window is left to book. Drives disabling the
/// reserve action entirely.
pub fn is_fully_booked(window: &AvailabilityWindow, blocked: &BlockedSet) -> bool {
    blocked.covers(window)
}

/// Initial picker selection: the first free day of the window at or after
/// `today`, falling back to the window start when everything is taken or
/// already past. Single-day range; the guest widens it from there.
///
/// `today` is passed in explicitly so the result is a pure function of its
/// inputs.
pub fn default_selection(
    window: &AvailabilityWindow,
    blocked: &BlockedSet,
    today: NaiveDate,
) -> DateInterval {
    window
        .days()
        .filter(|d| *d >= today)
        .find(|d| !blocked.is_blocked(*d))
        .map(DateInterval::single)
        .unwrap_or_else(|| DateInterval::single(window.start()))
}
