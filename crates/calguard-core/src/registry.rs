//! Static calendar registry configuration.
//!
//! Maps symbolic calendar identifiers to their owning party, category hint,
//! and scheduling priority. Loaded once at process start (compiled-in
//! defaults or TOML) and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Result;

/// Configuration for a single known calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub id: String,
    /// Symbolic owning party, or "shared".
    pub owner: String,
    pub category: Category,
    /// Scheduling priority. Informational only; reserved for tie-breaking.
    pub priority: i32,
}

/// Immutable registry of known calendars plus categorizer keyword data.
///
/// Serialized to/from TOML in the same shape:
///
/// ```toml
/// family_members = ["mia"]
///
/// [[calendars]]
/// id = "work"
/// owner = "alex"
/// category = "work"
/// priority = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRegistry {
    #[serde(default = "default_calendars")]
    calendars: Vec<CalendarConfig>,
    /// First names matched by the categorizer's family keyword pass.
    #[serde(default)]
    family_members: Vec<String>,
    /// Lower-cased employer-domain fragments treated as work calendars.
    #[serde(default = "default_employer_fragments")]
    employer_fragments: Vec<String>,
}

impl CalendarRegistry {
    /// Parse a registry from TOML.
    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Exact lookup by calendar identifier.
    pub fn lookup(&self, calendar_id: &str) -> Option<&CalendarConfig> {
        self.calendars.iter().find(|c| c.id == calendar_id)
    }

    pub fn family_members(&self) -> &[String] {
        &self.family_members
    }

    pub fn employer_fragments(&self) -> &[String] {
        &self.employer_fragments
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self {
            calendars: default_calendars(),
            family_members: Vec::new(),
            employer_fragments: default_employer_fragments(),
        }
    }
}

fn default_calendars() -> Vec<CalendarConfig> {
    let entry = |id: &str, owner: &str, category, priority| CalendarConfig {
        id: id.to_string(),
        owner: owner.to_string(),
        category,
        priority,
    };

    vec![
        entry("work", "primary", Category::Work, 1),
        entry("personal", "primary", Category::Personal, 2),
        entry("family", "shared", Category::Family, 1),
        entry("school", "shared", Category::School, 1),
        entry("appointments", "shared", Category::Health, 0),
    ]
}

fn default_employer_fragments() -> Vec<String> {
    vec!["corp".to_string()]
}
