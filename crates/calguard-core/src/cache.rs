//! Read-through report cache with TTL.
//!
//! Keys are content hashes of the query window and the event-id set, so the
//! same inputs hit the same entry regardless of event ordering. The cache is
//! strictly best-effort: the detector computes without it whenever an entry
//! is missing or unusable.

use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use sha2::{Digest, Sha256};

/// Default entry lifetime.
pub const DEFAULT_TTL_SECS: u64 = 300;

const DEFAULT_MAX_ENTRIES: u64 = 1024;

/// TTL cache holding serialized conflict reports.
#[derive(Clone)]
pub struct ReportCache {
    entries: Cache<String, String>,
    enabled: bool,
}

impl ReportCache {
    /// Create a cache with an explicit TTL and capacity.
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self {
            entries,
            enabled: true,
        }
    }

    /// Create a cache with the default 5-minute TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS), DEFAULT_MAX_ENTRIES)
    }

    /// Create a disabled cache: lookups miss, writes are dropped.
    pub fn disabled() -> Self {
        Self {
            entries: Cache::builder().max_capacity(0).build(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fetch a serialized report.
    pub async fn get(&self, key: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.entries.get(key).await
    }

    /// Store a serialized report.
    pub async fn put(&self, key: String, value: String) {
        if !self.enabled {
            return;
        }
        self.entries.insert(key, value).await;
    }

    /// Stable cache key for a `(period, event-id set)` query.
    ///
    /// Ids are sorted before hashing, so input ordering does not change the
    /// key.
    pub fn key_for(
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        event_ids: &[&str],
    ) -> String {
        let mut sorted: Vec<&str> = event_ids.to_vec();
        sorted.sort_unstable();

        let mut hasher = Sha256::new();
        hasher.update(period_start.to_rfc3339().as_bytes());
        hasher.update(b"\n");
        hasher.update(period_end.to_rfc3339().as_bytes());
        for id in sorted {
            hasher.update(b"\n");
            hasher.update(id.as_bytes());
        }

        hex::encode(hasher.finalize())
    }
}
