// Upstream data sources for a refresh.
// The manager depends on this seam; the HTTP client is the production source.

use std::future::Future;

use crate::error::Result;
use crate::github::{ContributionHistory, GitHubClient, UserProfile};

pub trait StatsSource: Send + Sync {
    /// Profile information: public repository count and creation date.
    fn profile(&self, identity: &str) -> impl Future<Output = Result<UserProfile>> + Send;

    /// Per-period totals and the daily contribution calendar.
    fn contributions(
        &self,
        identity: &str,
    ) -> impl Future<Output = Result<ContributionHistory>> + Send;
}

impl StatsSource for GitHubClient {
    async fn profile(&self, identity: &str) -> Result<UserProfile> {
        self.get_user(identity).await
    }

    async fn contributions(&self, identity: &str) -> Result<ContributionHistory> {
        self.get_contributions(identity).await
    }
}
