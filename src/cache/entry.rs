// Persisted cache entries for profile statistics.
// Handles the JSON envelope, the one-hour TTL, and per-identity keys.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::stats::ProfileStatsSnapshot;

use super::store::KeyValueStore;

/// Freshness window for cached statistics: 1 hour.
pub const STATS_TTL: Duration = Duration::from_secs(60 * 60);

const KEY_PREFIX: &str = "stats_cache_";

/// Storage key for an identity's cached snapshot.
pub fn cache_key(identity: &str) -> String {
    format!("{}{}", KEY_PREFIX, identity)
}

/// Snapshot stamped with its capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached snapshot.
    pub data: ProfileStatsSnapshot,
    /// Capture time in epoch milliseconds.
    pub timestamp: i64,
}

impl CacheEntry {
    /// Create an entry captured at `now`.
    pub fn new(data: ProfileStatsSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            data,
            timestamp: now.timestamp_millis(),
        }
    }

    /// Fresh iff `now - timestamp < ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age_ms = now.timestamp_millis().saturating_sub(self.timestamp);
        i128::from(age_ms) < ttl.as_millis() as i128
    }
}

/// Read the entry for an identity.
/// An unparseable value is reported as `StatsError::CacheRead`.
pub fn read_entry<S: KeyValueStore + ?Sized>(
    store: &S,
    identity: &str,
) -> Result<Option<CacheEntry>> {
    let key = cache_key(identity);
    let Some(raw) = store.get(&key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StatsError::CacheRead {
            key,
            reason: e.to_string(),
        })
}

/// Persist an entry under its identity's key.
pub fn write_entry<S: KeyValueStore + ?Sized>(store: &S, entry: &CacheEntry) -> Result<()> {
    let json = serde_json::to_string(entry)?;
    store.set(&cache_key(&entry.data.identity), &json)
}
