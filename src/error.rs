// Error types for folio-stats.
// Covers upstream HTTP failures, cache corruption, and configuration errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Corrupt cache entry for {key}: {reason}")]
    CacheRead { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification used when logging refresh failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Persisted entry unreadable; treated as a miss.
    CacheRead,
    /// A request failed or returned a non-success status.
    RefreshFetch,
    /// A response body was unparseable or missing fields.
    RefreshParse,
    Other,
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::CacheRead { .. } => ErrorKind::CacheRead,
            StatsError::Http(e) if e.is_decode() => ErrorKind::RefreshParse,
            StatsError::Http(_)
            | StatsError::NotFound(_)
            | StatsError::RateLimited { .. }
            | StatsError::Status { .. } => ErrorKind::RefreshFetch,
            StatsError::Json(_) | StatsError::InvalidField { .. } => ErrorKind::RefreshParse,
            StatsError::Io(_) | StatsError::Config(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = StatsError::CacheRead {
            key: "stats_cache_octocat".to_string(),
            reason: "eof".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::CacheRead);

        let err = StatsError::Status {
            url: "https://api.github.com/users/octocat".to_string(),
            status: 502,
        };
        assert_eq!(err.kind(), ErrorKind::RefreshFetch);

        let err = StatsError::InvalidField {
            field: "created_at",
            reason: "not a date".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::RefreshParse);

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(StatsError::from(json_err).kind(), ErrorKind::RefreshParse);
    }
}
