use crate::error::EngineError;
use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive range of calendar days. `start <= end` always holds;
/// a single-day interval has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    // Callers must guarantee `start <= end`.
    pub(crate) fn spanning(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Every day of the interval in order, both endpoints included.
    /// Each call returns a fresh iterator, so enumeration is restartable.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of nights a stay over this range is billed for. A same-day
    /// range still counts as a minimum one-night stay.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }

    /// The part of this interval that lies within `bounds`, or `None` if
    /// they are disjoint.
    pub fn clamp_to(&self, bounds: &DateInterval) -> Option<DateInterval> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        (start <= end).then_some(DateInterval { start, end })
    }
}
