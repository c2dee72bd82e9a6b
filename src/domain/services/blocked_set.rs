use crate::domain::models::booking::BookedInterval;
use crate::domain::models::interval::DateInterval;
use crate::domain::models::room::AvailabilityWindow;
use chrono::NaiveDate;

/// The canonical union of a room's booked date ranges.
///
/// Invariant: member intervals are sorted by start and pairwise
/// non-touching. Adjacent bookings are merged, since a checkout day that
/// is another booking's check-in day is still blocked for new guests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockedSet {
    intervals: Vec<DateInterval>,
}

impl BlockedSet {
    /// Merges the given bookings into a sorted, disjoint set. Input may be
    /// unordered and overlapping; the result is the same for any
    /// permutation, and re-merging an already merged set is a no-op.
    pub fn build(bookings: &[BookedInterval]) -> Self {
        let mut ranges: Vec<DateInterval> = bookings.iter().map(|b| b.range).collect();
        ranges.sort_unstable();

        let mut intervals: Vec<DateInterval> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match intervals.last_mut() {
                Some(last) if touches_or_overlaps(last, &range) => {
                    if range.end() > last.end() {
                        *last = DateInterval::spanning(last.start(), range.end());
                    }
                }
                _ => intervals.push(range),
            }
        }

        Self { intervals }
    }

    /// Whether `date` falls inside any booked range. O(log n).
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.start() <= date);
        idx > 0 && self.intervals[idx - 1].contains(date)
    }

    /// Whether the whole window is booked out. Merged intervals never
    /// touch, so a fully covered window must lie inside a single member.
    pub fn covers(&self, window: &AvailabilityWindow) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.start() <= window.start());
        if idx == 0 {
            return false;
        }
        let candidate = &self.intervals[idx - 1];
        candidate.contains(window.start()) && candidate.contains(window.end())
    }

    pub fn intervals(&self) -> &[DateInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

fn touches_or_overlaps(last: &DateInterval, next: &DateInterval) -> bool {
    match last.end().succ_opt() {
        Some(boundary) => next.start() <= boundary,
        // last already runs to the end of the calendar
        None => true,
    }
}
