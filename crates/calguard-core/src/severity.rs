//! Conflict severity classification.
//!
//! Severity is derived from the categories of the two overlapping events via
//! a fixed precedence table. The classification is symmetric and total over
//! every category pairing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Conflict severity, totally ordered: `Critical > High > Medium > Low`.
///
/// Derived `Ord` follows declaration order, so `Low` is least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify an overlapping pair by category. First match wins:
    /// health involvement is critical; work/family, work/work and
    /// school/work pairings are high; any other pairing touching work or
    /// school is medium; everything else is low.
    pub fn classify(a: Category, b: Category) -> Severity {
        use Category::*;

        match (a, b) {
            (Health, _) | (_, Health) => Severity::Critical,
            (Work, Family) | (Family, Work) => Severity::High,
            (Work, Work) => Severity::High,
            (School, Work) | (Work, School) => Severity::High,
            (Work, _) | (_, Work) | (School, _) | (_, School) => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}
