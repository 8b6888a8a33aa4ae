// Display-ready profile statistics.
// The snapshot is what the display renders and what the cache persists.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Repository count as shown on the display.
/// Hand-authored seeds may carry text such as "20+".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepoCount {
    Number(u64),
    Text(String),
}

impl RepoCount {
    pub fn display(&self) -> String {
        match self {
            RepoCount::Number(n) => n.to_string(),
            RepoCount::Text(s) => s.clone(),
        }
    }
}

impl Default for RepoCount {
    fn default() -> Self {
        RepoCount::Number(0)
    }
}

/// One day of contribution history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u64,
    /// Intensity bucket, 0 (none) to 4 (most). Larger values read as 4.
    #[serde(deserialize_with = "clamped_level")]
    pub level: u8,
}

pub const MAX_LEVEL: u8 = 4;

fn clamped_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = u64::deserialize(deserializer)?;
    Ok(raw.min(u64::from(MAX_LEVEL)) as u8)
}

/// Normalized statistics bundle for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsSnapshot {
    pub repository_count: RepoCount,
    pub total_contributions: u64,
    pub years_active: u32,
    pub identity: String,
    /// Always ascending by date.
    #[serde(default)]
    pub contribution_calendar: Vec<ContributionDay>,
}

impl ProfileStatsSnapshot {
    /// An empty snapshot for an identity with no hand-authored seed.
    pub fn empty(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            ..Self::default()
        }
    }

    /// Sort the calendar ascending by date.
    pub fn normalized(mut self) -> Self {
        self.contribution_calendar.sort_by_key(|day| day.date);
        self
    }

    /// Total contributions with thousands grouping, e.g. `1,234`.
    pub fn display_total(&self) -> String {
        group_thousands(self.total_contributions)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u64, level: u8) -> ContributionDay {
        ContributionDay {
            date: date.parse().unwrap(),
            count,
            level,
        }
    }

    #[test]
    fn test_display_total_grouping() {
        let mut snapshot = ProfileStatsSnapshot::empty("octocat");
        assert_eq!(snapshot.display_total(), "0");

        snapshot.total_contributions = 999;
        assert_eq!(snapshot.display_total(), "999");

        snapshot.total_contributions = 1234;
        assert_eq!(snapshot.display_total(), "1,234");

        snapshot.total_contributions = 1_234_567;
        assert_eq!(snapshot.display_total(), "1,234,567");
    }

    #[test]
    fn test_normalized_sorts_calendar() {
        let snapshot = ProfileStatsSnapshot {
            contribution_calendar: vec![day("2024-03-01", 1, 1), day("2024-01-01", 2, 2)],
            ..ProfileStatsSnapshot::empty("octocat")
        }
        .normalized();

        let dates: Vec<String> = snapshot
            .contribution_calendar
            .iter()
            .map(|d| d.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-03-01"]);
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{
            "repositoryCount": "20+",
            "totalContributions": 812,
            "yearsActive": 3,
            "identity": "octocat",
            "contributionCalendar": [{"date": "2024-01-01", "count": 5, "level": 2}]
        }"#;

        let snapshot: ProfileStatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.repository_count, RepoCount::Text("20+".to_string()));
        assert_eq!(snapshot.repository_count.display(), "20+");
        assert_eq!(snapshot.contribution_calendar[0], day("2024-01-01", 5, 2));

        let value = serde_json::to_value(ProfileStatsSnapshot::empty("octocat")).unwrap();
        assert_eq!(value["repositoryCount"], 0);
        assert_eq!(value["contributionCalendar"], serde_json::json!([]));
    }

    #[test]
    fn test_out_of_range_level_reads_as_max() {
        let days: Vec<ContributionDay> = serde_json::from_str(
            r#"[{"date": "2024-01-01", "count": 1, "level": 7},
                {"date": "2024-01-02", "count": 1, "level": 300}]"#,
        )
        .unwrap();
        assert_eq!(days[0].level, 4);
        assert_eq!(days[1].level, 4);
    }
}
