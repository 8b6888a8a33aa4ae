// Snapshot derivation from upstream responses.
// Pure: the same seed, responses, and year always give the same snapshot.

use crate::error::Result;
use crate::github::{ContributionHistory, UserProfile};

use super::snapshot::{ContributionDay, ProfileStatsSnapshot, RepoCount};

/// Build a fresh snapshot from a profile and a contribution history.
///
/// Any derived field that is zero or empty falls back to the seed's value, so a
/// degraded upstream response never replaces known-good seed data. This also
/// masks a genuinely zero upstream value, such as an account with no public
/// repositories.
pub fn derive_snapshot(
    identity: &str,
    seed: &ProfileStatsSnapshot,
    profile: &UserProfile,
    history: &ContributionHistory,
    current_year: i32,
) -> Result<ProfileStatsSnapshot> {
    let repository_count = if profile.public_repos > 0 {
        RepoCount::Number(profile.public_repos)
    } else {
        seed.repository_count.clone()
    };

    let total = history.total_sum()?;
    let total_contributions = if total > 0 {
        total
    } else {
        seed.total_contributions
    };

    let years = current_year - profile.created_year()?;
    let years_active = match u32::try_from(years) {
        Ok(years) if years > 0 => years,
        _ => seed.years_active,
    };

    let mut calendar: Vec<ContributionDay> = history.contributions.clone();
    calendar.sort_by_key(|day| day.date);
    let contribution_calendar = if calendar.is_empty() {
        seed.contribution_calendar.clone()
    } else {
        calendar
    };

    Ok(ProfileStatsSnapshot {
        repository_count,
        total_contributions,
        years_active,
        identity: identity.to_string(),
        contribution_calendar,
    })
}
