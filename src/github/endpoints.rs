// Upstream endpoint functions.
// Typed fetches for a profile and its contribution history.

use crate::config::validate_identity;
use crate::error::Result;

use super::client::GitHubClient;
use super::types::{ContributionHistory, UserProfile};

impl GitHubClient {
    /// Get public profile information for a user.
    pub async fn get_user(&self, identity: &str) -> Result<UserProfile> {
        validate_identity(identity)?;
        let response = self.get_profile_api(&format!("/users/{}", identity)).await?;
        let user: UserProfile = response.json().await?;
        Ok(user)
    }

    /// Get the contribution history for a user.
    pub async fn get_contributions(&self, identity: &str) -> Result<ContributionHistory> {
        validate_identity(identity)?;
        let response = self
            .get_contributions_api(&format!("/{}", identity))
            .await?;
        let history: ContributionHistory = response.json().await?;
        Ok(history)
    }
}
