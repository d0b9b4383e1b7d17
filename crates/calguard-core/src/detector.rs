//! Conflict detection orchestration.
//!
//! Pairwise-compares an event list, classifies every overlap, and assembles
//! a severity-sorted report. An optional read-through cache fronts the
//! computation; cache problems are logged and absorbed, never surfaced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::cache::ReportCache;
use crate::category::Categorizer;
use crate::event::Event;
use crate::overlap;
use crate::recommend::recommend;
use crate::registry::CalendarRegistry;
use crate::severity::Severity;

/// A detected overlapping pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Stable digest of the two event ids; identical across repeated runs.
    pub id: String,
    pub severity: Severity,
    /// The two overlapping events in full, so callers need no second lookup.
    pub events: [Event; 2],
    pub overlap_minutes: i64,
    /// Ordered remediation suggestions, never empty.
    pub recommendations: Vec<String>,
    /// When the conflict was computed, not when the events occur.
    pub detected_at: DateTime<Utc>,
}

/// Per-severity conflict counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ConflictSummary {
    pub fn from_conflicts(conflicts: &[Conflict]) -> Self {
        let mut summary = Self {
            total: conflicts.len(),
            ..Self::default()
        };

        for conflict in conflicts {
            match conflict.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }

        summary
    }
}

/// The requested detection window. Labels the report; it does not filter
/// the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Output of a detection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub period: ReportPeriod,
    pub summary: ConflictSummary,
    /// Sorted by severity descending; discovery order breaks ties.
    pub conflicts: Vec<Conflict>,
    pub generated_at: DateTime<Utc>,
}

/// Orchestrates categorization, overlap math, severity classification and
/// recommendations over an event list.
#[derive(Clone)]
pub struct ConflictDetector {
    categorizer: Categorizer,
    cache: ReportCache,
}

impl ConflictDetector {
    /// Detector without caching.
    pub fn new(registry: CalendarRegistry) -> Self {
        Self::with_cache(registry, ReportCache::disabled())
    }

    /// Detector fronted by a read-through report cache.
    pub fn with_cache(registry: CalendarRegistry, cache: ReportCache) -> Self {
        Self {
            categorizer: Categorizer::new(registry),
            cache,
        }
    }

    /// Detect all pairwise conflicts in `events`.
    ///
    /// The period labels the report; filtering events to the period is the
    /// provider's responsibility. O(n²) over the input, which is expected to
    /// hold tens of events for a multi-day window.
    pub async fn detect(
        &self,
        events: &[Event],
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> ConflictReport {
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        let key = ReportCache::key_for(period_start, period_end, &ids);

        if let Some(raw) = self.cache.get(&key).await {
            match serde_json::from_str::<ConflictReport>(&raw) {
                Ok(report) => {
                    debug!(%key, "conflict report cache hit");
                    return report;
                }
                Err(error) => {
                    warn!(%key, %error, "discarding undecodable cached report");
                }
            }
        }

        let report = self.compute(events, period_start, period_end);

        match serde_json::to_string(&report) {
            Ok(raw) => self.cache.put(key, raw).await,
            Err(error) => warn!(%error, "failed to serialize report for caching"),
        }

        report
    }

    fn compute(
        &self,
        events: &[Event],
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> ConflictReport {
        let mut conflicts = Vec::new();

        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                if !overlap::overlaps(a, b) {
                    continue;
                }
                let minutes = overlap::overlap_minutes(a, b);
                if minutes <= 0 {
                    // Sub-minute and degenerate-instant overlaps floor to
                    // zero and are not reported.
                    continue;
                }

                let category_a = self.categorizer.categorize(a);
                let category_b = self.categorizer.categorize(b);
                let severity = Severity::classify(category_a, category_b);

                conflicts.push(Conflict {
                    id: conflict_id(&a.id, &b.id),
                    severity,
                    events: [a.clone(), b.clone()],
                    overlap_minutes: minutes,
                    recommendations: recommend(severity, category_a, category_b, minutes),
                    detected_at: Utc::now(),
                });
            }
        }

        // Stable sort keeps pairwise-discovery order within a severity.
        conflicts.sort_by(|x, y| y.severity.cmp(&x.severity));

        ConflictReport {
            period: ReportPeriod {
                start: period_start,
                end: period_end,
            },
            summary: ConflictSummary::from_conflicts(&conflicts),
            conflicts,
            generated_at: Utc::now(),
        }
    }
}

/// Deterministic conflict id from the two event ids, order-normalized.
fn conflict_id(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = Sha256::new();
    hasher.update(first.as_bytes());
    hasher.update(b"\n");
    hasher.update(second.as_bytes());

    hex::encode(hasher.finalize())[..16].to_string()
}
