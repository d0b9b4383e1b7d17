//! Calendar event model and provider-boundary validation.
//!
//! Providers hand over loosely shaped records; everything past this module
//! works with fully validated [`Event`] values. An inverted interval
//! (`end <= start`) is tolerated here and degenerated by the overlap engine,
//! never reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A calendar event as seen by the engine.
///
/// `id` is unique within the set passed to one call, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Display title. May be empty; placeholder text is a formatting concern.
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Source calendar identifier, consumed by the categorizer.
    pub calendar_id: String,
}

/// Raw event record as produced by a calendar provider client.
///
/// Timestamps arrive as ISO-8601 strings with an offset or a `Z` suffix.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub calendar_id: Option<String>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        summary: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        calendar_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            start,
            end,
            calendar_id: calendar_id.into(),
        }
    }

    /// Validate a raw provider record into an engine event.
    ///
    /// Missing fields and unparseable timestamps fail the call with a typed
    /// error rather than flowing into the pairwise comparison.
    pub fn from_provider(raw: RawEvent) -> Result<Self, ValidationError> {
        let start = parse_timestamp(&raw.id, "start", raw.start.as_deref())?;
        let end = parse_timestamp(&raw.id, "end", raw.end.as_deref())?;
        let calendar_id = raw.calendar_id.ok_or(ValidationError::MissingField {
            event_id: raw.id.clone(),
            field: "calendar_id",
        })?;

        Ok(Self {
            id: raw.id,
            summary: raw.summary,
            start,
            end,
            calendar_id,
        })
    }

    /// Nominal duration in whole minutes. Negative for inverted intervals.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

fn parse_timestamp(
    event_id: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField {
        event_id: event_id.to_string(),
        field,
    })?;

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidTimestamp {
            event_id: event_id.to_string(),
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start: Option<&str>, end: Option<&str>, calendar_id: Option<&str>) -> RawEvent {
        RawEvent {
            id: "evt-1".to_string(),
            summary: "Team sync".to_string(),
            start: start.map(String::from),
            end: end.map(String::from),
            calendar_id: calendar_id.map(String::from),
        }
    }

    #[test]
    fn parses_offset_and_utc_timestamps() {
        let event = Event::from_provider(raw(
            Some("2025-03-10T09:00:00+02:00"),
            Some("2025-03-10T10:00:00Z"),
            Some("work"),
        ))
        .unwrap();

        assert_eq!(event.start.to_rfc3339(), "2025-03-10T07:00:00+00:00");
        assert_eq!(event.duration_minutes(), 180);
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let err = Event::from_provider(raw(
            Some("not-a-timestamp"),
            Some("2025-03-10T10:00:00Z"),
            Some("work"),
        ))
        .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::InvalidTimestamp { field: "start", .. }
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        let err =
            Event::from_provider(raw(Some("2025-03-10T09:00:00Z"), None, Some("work"))).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "end", .. }));

        let err = Event::from_provider(raw(
            Some("2025-03-10T09:00:00Z"),
            Some("2025-03-10T10:00:00Z"),
            None,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "calendar_id",
                ..
            }
        ));
    }

    #[test]
    fn empty_summary_is_accepted() {
        let mut record = raw(
            Some("2025-03-10T09:00:00Z"),
            Some("2025-03-10T10:00:00Z"),
            Some("personal"),
        );
        record.summary = String::new();

        let event = Event::from_provider(record).unwrap();
        assert!(event.summary.is_empty());
    }

    #[test]
    fn inverted_interval_is_tolerated() {
        let event = Event::from_provider(raw(
            Some("2025-03-10T10:00:00Z"),
            Some("2025-03-10T09:00:00Z"),
            Some("work"),
        ))
        .unwrap();

        assert_eq!(event.duration_minutes(), -60);
    }
}
