//! Event categorization rules.
//!
//! Ordered rule precedence, first match wins:
//! 1. calendar-id substring patterns
//! 2. exact registry lookup
//! 3. title keyword scan (work, family, school, health, travel in that order)
//! 4. default: personal
//!
//! Calendar-source metadata is a stronger signal than free-text titles, so
//! it is always checked first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::registry::CalendarRegistry;

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Family,
    Personal,
    School,
    Health,
    Travel,
}

impl Category {
    /// Every category, for exhaustive pairing checks.
    pub const ALL: [Category; 6] = [
        Category::Work,
        Category::Family,
        Category::Personal,
        Category::School,
        Category::Health,
        Category::Travel,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Work => write!(f, "work"),
            Category::Family => write!(f, "family"),
            Category::Personal => write!(f, "personal"),
            Category::School => write!(f, "school"),
            Category::Health => write!(f, "health"),
            Category::Travel => write!(f, "travel"),
        }
    }
}

const WORK_KEYWORDS: &[&str] = &[
    "meeting",
    "call",
    "interview",
    "standup",
    "client",
    "project",
    "review",
    "sprint",
    "presentation",
];

const FAMILY_KEYWORDS: &[&str] = &[
    "family",
    "birthday",
    "anniversary",
    "dinner",
    "vacation",
    "holiday",
    "kids",
];

const SCHOOL_KEYWORDS: &[&str] = &["school", "class", "exam", "homework", "teacher", "field trip"];

const HEALTH_KEYWORDS: &[&str] = &[
    "doctor",
    "dentist",
    "appointment",
    "checkup",
    "therapy",
    "medical",
    "hospital",
];

const TRAVEL_KEYWORDS: &[&str] = &["travel", "flight"];

/// Classifies events into categories using the injected registry.
#[derive(Debug, Clone)]
pub struct Categorizer {
    registry: CalendarRegistry,
}

impl Categorizer {
    pub fn new(registry: CalendarRegistry) -> Self {
        Self { registry }
    }

    /// Classify a single event. Total: always returns a category.
    pub fn categorize(&self, event: &Event) -> Category {
        let calendar_id = event.calendar_id.to_lowercase();

        if calendar_id.contains("appointment") || calendar_id.contains("health") {
            return Category::Health;
        }
        if calendar_id.contains("family") {
            return Category::Family;
        }
        if calendar_id.contains("school") {
            return Category::School;
        }
        if calendar_id.contains("work")
            || self
                .registry
                .employer_fragments()
                .iter()
                .any(|fragment| calendar_id.contains(fragment.as_str()))
        {
            return Category::Work;
        }
        if calendar_id.contains("personal") {
            return Category::Personal;
        }

        if let Some(config) = self.registry.lookup(&event.calendar_id) {
            return config.category;
        }

        self.categorize_summary(&event.summary.to_lowercase())
    }

    fn categorize_summary(&self, summary: &str) -> Category {
        if WORK_KEYWORDS.iter().any(|k| summary.contains(k)) {
            return Category::Work;
        }
        if FAMILY_KEYWORDS.iter().any(|k| summary.contains(k))
            || self
                .registry
                .family_members()
                .iter()
                .any(|name| summary.contains(&name.to_lowercase()))
        {
            return Category::Family;
        }
        if SCHOOL_KEYWORDS.iter().any(|k| summary.contains(k)) {
            return Category::School;
        }
        if HEALTH_KEYWORDS.iter().any(|k| summary.contains(k)) {
            return Category::Health;
        }
        if TRAVEL_KEYWORDS.iter().any(|k| summary.contains(k)) {
            return Category::Travel;
        }

        Category::Personal
    }
}
