//! Interval overlap math over calendar events.
//!
//! Intervals are half-open: two events that merely touch at a boundary do
//! not overlap. An inverted interval (`end <= start`) degenerates to a
//! zero-duration instant at its start; it can still overlap an event that
//! spans that instant.

use chrono::{DateTime, Utc};

use crate::event::Event;

/// Effective end of an event. Equals the start when the interval is inverted.
pub(crate) fn effective_end(event: &Event) -> DateTime<Utc> {
    if event.end > event.start {
        event.end
    } else {
        event.start
    }
}

/// Strict overlap test: `a.start < b.end && b.start < a.end`.
pub fn overlaps(a: &Event, b: &Event) -> bool {
    a.start < effective_end(b) && b.start < effective_end(a)
}

/// Overlap duration in whole minutes, floored. Zero when the events do not
/// overlap; sub-minute overlaps floor to zero.
pub fn overlap_minutes(a: &Event, b: &Event) -> i64 {
    let start = a.start.max(b.start);
    let end = effective_end(a).min(effective_end(b));
    (end - start).num_minutes().max(0)
}
