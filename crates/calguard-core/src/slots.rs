//! Free-slot search over a detection period.
//!
//! Walks each day of the period, lays that day's events sorted by start
//! against the working window, and emits the gaps long enough to hold the
//! requested duration. An event belongs to the day its start falls on, and
//! its times are used as given: an event outside the working window is not
//! clamped, so a gap bounded by it can extend past the nominal window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::overlap::effective_end;

/// Daily working window, expressed as whole hours on the UTC clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for WorkingHours {
    /// 09:00 to 17:00.
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

/// An open stretch within one day's working window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Find every free slot of at least `duration_minutes` within the working
/// hours of each day touched by `[period_start, period_end]`.
///
/// Slots come back ordered by day, then chronologically within the day. A
/// working window with `end_hour <= start_hour` is empty and yields nothing.
pub fn find_free_slots(
    events: &[Event],
    duration_minutes: i64,
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    hours: WorkingHours,
) -> Vec<FreeSlot> {
    let mut slots = Vec::new();
    let mut day = period_start.date_naive();
    let last_day = period_end.date_naive();

    while day <= last_day {
        if let Some((window_start, window_end)) = day_window(day, hours) {
            collect_day_slots(events, duration_minutes, day, window_start, window_end, &mut slots);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    slots
}

/// The working window for one day, or `None` when the hours fall outside
/// the clock.
fn day_window(day: NaiveDate, hours: WorkingHours) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = day.and_hms_opt(hours.start_hour, 0, 0)?.and_utc();
    let end = day.and_hms_opt(hours.end_hour, 0, 0)?.and_utc();
    Some((start, end))
}

fn collect_day_slots(
    events: &[Event],
    duration_minutes: i64,
    day: NaiveDate,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    slots: &mut Vec<FreeSlot>,
) {
    let mut day_events: Vec<&Event> = events
        .iter()
        .filter(|e| e.start.date_naive() == day)
        .collect();
    day_events.sort_by_key(|e| e.start);

    let Some(first) = day_events.first() else {
        push_slot(slots, window_start, window_end, duration_minutes);
        return;
    };

    push_slot(slots, window_start, first.start, duration_minutes);
    for pair in day_events.windows(2) {
        push_slot(slots, effective_end(pair[0]), pair[1].start, duration_minutes);
    }
    if let Some(last) = day_events.last() {
        let last_end = effective_end(last);
        if last_end < window_end {
            push_slot(slots, last_end, window_end, duration_minutes);
        }
    }
}

/// Record the gap if it is real and long enough.
fn push_slot(
    slots: &mut Vec<FreeSlot>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    duration_minutes: i64,
) {
    if end <= start {
        return;
    }
    let minutes = (end - start).num_minutes();
    if minutes < duration_minutes {
        return;
    }

    slots.push(FreeSlot {
        start,
        end,
        duration_minutes: minutes,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
    }

    fn event(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::new(id, "busy", start, end, "work")
    }

    #[test]
    fn single_event_splits_the_day_in_two() {
        let events = vec![event("lunch", at(10, 12, 0), at(10, 13, 0))];

        let slots = find_free_slots(
            &events,
            60,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start, at(10, 9, 0));
        assert_eq!(slots[0].end, at(10, 12, 0));
        assert_eq!(slots[0].duration_minutes, 180);
        assert_eq!(slots[1].start, at(10, 13, 0));
        assert_eq!(slots[1].end, at(10, 17, 0));
        assert_eq!(slots[1].duration_minutes, 240);
    }

    #[test]
    fn empty_day_yields_the_whole_window() {
        let slots = find_free_slots(
            &[],
            60,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, at(10, 9, 0));
        assert_eq!(slots[0].end, at(10, 17, 0));
        assert_eq!(slots[0].duration_minutes, 480);
    }

    #[test]
    fn gaps_shorter_than_requested_are_dropped() {
        let events = vec![
            event("a", at(10, 9, 0), at(10, 12, 0)),
            // 30-minute gap, below the requested hour.
            event("b", at(10, 12, 30), at(10, 17, 0)),
        ];

        let slots = find_free_slots(
            &events,
            60,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn back_to_back_events_leave_no_middle_gap() {
        let events = vec![
            event("a", at(10, 10, 0), at(10, 11, 0)),
            event("b", at(10, 11, 0), at(10, 12, 0)),
        ];

        let slots = find_free_slots(
            &events,
            30,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].end, at(10, 10, 0));
        assert_eq!(slots[1].start, at(10, 12, 0));
    }

    #[test]
    fn early_event_keeps_its_raw_times() {
        // Runs 08:00 to 10:30. No leading gap (it starts before the window);
        // the trailing gap starts at the raw end, unclamped.
        let events = vec![event("early", at(10, 8, 0), at(10, 10, 30))];

        let slots = find_free_slots(
            &events,
            60,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, at(10, 10, 30));
        assert_eq!(slots[0].end, at(10, 17, 0));
    }

    #[test]
    fn evening_event_stretches_the_leading_gap_past_the_window() {
        // An event after hours still bounds the gap, so the gap runs to its
        // start rather than stopping at the window end.
        let events = vec![event("dinner", at(10, 19, 0), at(10, 20, 0))];

        let slots = find_free_slots(
            &events,
            60,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, at(10, 9, 0));
        assert_eq!(slots[0].end, at(10, 19, 0));
        assert_eq!(slots[0].duration_minutes, 600);
    }

    #[test]
    fn events_belong_to_their_start_day() {
        // Starts the day before, so day 10 does not count it even though it
        // spills into the morning.
        let events = vec![event("overnight", at(9, 22, 0), at(10, 10, 0))];

        let slots = find_free_slots(
            &events,
            60,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, at(10, 9, 0));
        assert_eq!(slots[0].end, at(10, 17, 0));
    }

    #[test]
    fn event_covering_the_whole_window_yields_nothing() {
        let events = vec![event("offsite", at(10, 8, 0), at(10, 18, 0))];

        let slots = find_free_slots(
            &events,
            30,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn multi_day_slots_come_back_in_day_order() {
        let events = vec![
            event("a", at(10, 9, 0), at(10, 16, 0)),
            event("b", at(11, 10, 0), at(11, 17, 0)),
        ];

        let slots = find_free_slots(
            &events,
            60,
            at(10, 0, 0),
            at(11, 23, 59),
            WorkingHours::default(),
        );

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start, at(10, 16, 0));
        assert_eq!(slots[0].end, at(10, 17, 0));
        assert_eq!(slots[1].start, at(11, 9, 0));
        assert_eq!(slots[1].end, at(11, 10, 0));
    }

    #[test]
    fn slots_never_undercut_the_requested_duration() {
        let events = vec![
            event("a", at(10, 9, 45), at(10, 10, 15)),
            event("b", at(10, 13, 0), at(10, 14, 0)),
        ];

        let slots = find_free_slots(
            &events,
            45,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours::default(),
        );

        assert!(!slots.is_empty());
        for slot in &slots {
            assert!(slot.duration_minutes >= 45);
            assert_eq!(slot.duration_minutes, (slot.end - slot.start).num_minutes());
        }
        for pair in slots.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn inverted_working_hours_yield_nothing() {
        let slots = find_free_slots(
            &[],
            30,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours {
                start_hour: 17,
                end_hour: 9,
            },
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn custom_working_hours_bound_the_window() {
        let slots = find_free_slots(
            &[],
            30,
            at(10, 0, 0),
            at(10, 23, 59),
            WorkingHours {
                start_hour: 8,
                end_hour: 12,
            },
        );

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, at(10, 8, 0));
        assert_eq!(slots[0].end, at(10, 12, 0));
        assert_eq!(slots[0].duration_minutes, 240);
    }
}
