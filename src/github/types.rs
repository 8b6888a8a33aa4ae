// Upstream response types.
// Structs for the profile-info and contribution-history JSON bodies.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::stats::ContributionDay;

/// GitHub user profile, reduced to the fields the statistics need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub login: Option<String>,
    pub public_repos: u64,
    /// RFC 3339 timestamp from GitHub, or a plain `YYYY-MM-DD` date.
    pub created_at: String,
}

impl UserProfile {
    /// Calendar year the account was created.
    pub fn created_year(&self) -> Result<i32> {
        let raw = self.created_at.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.year());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| date.year())
            .map_err(|e| StatsError::InvalidField {
                field: "created_at",
                reason: format!("{:?}: {}", raw, e),
            })
    }
}

/// Contribution history: per-period totals plus the daily calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionHistory {
    /// Period (usually a year) to contribution count.
    #[serde(default)]
    pub total: BTreeMap<String, u64>,
    #[serde(default)]
    pub contributions: Vec<ContributionDay>,
}

impl ContributionHistory {
    /// Sum of every period total.
    pub fn total_sum(&self) -> Result<u64> {
        self.total
            .values()
            .try_fold(0u64, |acc, n| acc.checked_add(*n))
            .ok_or_else(|| StatsError::InvalidField {
                field: "total",
                reason: "sum of period totals overflows".to_string(),
            })
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
