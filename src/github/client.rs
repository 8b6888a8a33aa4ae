// Upstream HTTP client.
// Handles authentication, rate limit tracking, and status-to-error mapping.

use std::sync::Mutex;

use reqwest::{
    Client, RequestBuilder, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::config::Config;
use crate::error::{Result, StatsError};

use super::types::RateLimit;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Client for the profile-info API and the contribution-history API.
pub struct GitHubClient {
    client: Client,
    /// Only ever sent to the profile-info API.
    token: Option<String>,
    profile_base: String,
    contributions_base: String,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a client against the given base URLs.
    pub fn new(
        token: Option<&str>,
        profile_base: &str,
        contributions_base: &str,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("folio-stats"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(StatsError::Http)?;

        Ok(Self {
            client,
            token: token.map(str::to_string),
            profile_base: profile_base.trim_end_matches('/').to_string(),
            contributions_base: contributions_base.trim_end_matches('/').to_string(),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.github_token.as_deref(),
            &config.profile_api,
            &config.contributions_api,
        )
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// GET a path on the profile-info API.
    pub async fn get_profile_api(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.profile_base, endpoint);
        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| StatsError::Config(format!("invalid token: {}", e)))?;
            request = request.header(AUTHORIZATION, value);
        }

        self.send(request).await
    }

    /// GET a path on the contribution-history API.
    pub async fn get_contributions_api(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.contributions_base, endpoint);
        let request = self.client.get(&url).header(ACCEPT, "application/json");
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(StatsError::Http)?;
        self.update_rate_limit(&response);
        self.check_response(response)
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };

        let mut rate_limit = self.rate_limit.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(limit) = header("x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        match status {
            StatusCode::NOT_FOUND => Err(StatsError::NotFound(url)),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
                if response.headers().get("x-ratelimit-remaining")
                    == Some(&HeaderValue::from_static("0")) =>
            {
                let reset = self.rate_limit().reset;
                let reset_at = chrono::DateTime::from_timestamp(reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(StatsError::RateLimited { reset_at })
            }
            status => Err(StatsError::Status {
                url,
                status: status.as_u16(),
            }),
        }
    }
}
