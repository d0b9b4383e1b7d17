//! Remediation suggestions for detected conflicts.
//!
//! Suggestions are keyed off severity and the category pairing, with a
//! trailing note for short overlaps that can be cleared by nudging start or
//! end times.

use crate::category::Category;
use crate::severity::Severity;

/// Overlaps shorter than this get the adjusted-times note.
const SHORT_OVERLAP_MINUTES: i64 = 30;

/// Produce an ordered list of remediation suggestions. Never empty.
pub fn recommend(
    severity: Severity,
    a: Category,
    b: Category,
    overlap_minutes: i64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    match severity {
        Severity::Critical => {
            suggestions.push(
                "URGENT: a health-related event is double-booked. Reschedule the \
                 non-critical event immediately."
                    .to_string(),
            );
        }
        Severity::High if a == Category::Work && b == Category::Work => {
            suggestions.push(
                "Prioritize the more important meeting, or combine both into a single session."
                    .to_string(),
            );
        }
        Severity::High if is_work_family_pair(a, b) => {
            suggestions
                .push("Delegate the work commitment or join it remotely.".to_string());
            suggestions.push(
                "Check whether the family event allows a flexible arrangement.".to_string(),
            );
        }
        Severity::High => {
            suggestions.push(
                "Decide which commitment takes priority and reschedule the other.".to_string(),
            );
        }
        Severity::Medium => {
            suggestions.push(
                "Review whether the personal or flexible event can be moved or shortened."
                    .to_string(),
            );
        }
        Severity::Low => {
            suggestions.push(
                "Evaluate whether both events are truly necessary, or combine them.".to_string(),
            );
        }
    }

    if overlap_minutes < SHORT_OVERLAP_MINUTES {
        suggestions.push(
            "The overlap is short; adjusted start or end times may resolve it without \
             cancelling either event."
                .to_string(),
        );
    }

    suggestions
}

fn is_work_family_pair(a: Category, b: Category) -> bool {
    matches!(
        (a, b),
        (Category::Work, Category::Family) | (Category::Family, Category::Work)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_severity_yields_at_least_one_suggestion() {
        for a in Category::ALL {
            for b in Category::ALL {
                let severity = Severity::classify(a, b);
                assert!(!recommend(severity, a, b, 45).is_empty());
            }
        }
    }

    #[test]
    fn critical_leads_with_urgency() {
        let suggestions = recommend(Severity::Critical, Category::Health, Category::Work, 60);
        assert!(suggestions[0].starts_with("URGENT"));
    }

    #[test]
    fn work_family_pair_suggests_delegation() {
        let suggestions = recommend(Severity::High, Category::Family, Category::Work, 60);
        assert!(suggestions.iter().any(|s| s.contains("Delegate")));
        assert!(suggestions.iter().any(|s| s.contains("family event")));
    }

    #[test]
    fn work_work_pair_suggests_combining() {
        let suggestions = recommend(Severity::High, Category::Work, Category::Work, 60);
        assert!(suggestions.iter().any(|s| s.contains("combine")));
    }

    #[test]
    fn short_overlap_appends_adjustment_note() {
        let short = recommend(Severity::Low, Category::Personal, Category::Personal, 15);
        assert!(short.last().unwrap().contains("adjusted start or end times"));

        let long = recommend(Severity::Low, Category::Personal, Category::Personal, 45);
        assert!(!long.last().unwrap().contains("adjusted start or end times"));
    }
}
