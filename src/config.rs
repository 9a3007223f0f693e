//! Board API configuration parsed from environment variables.

use crate::error::BoardError;

pub const ENV_API_URL: &str = "BOARD_API_URL";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP timeout settings for the board API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Connection settings for the board backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: ApiTimeouts,
}

impl ApiConfig {
    /// Build a config with default timeouts. The trailing slash is trimmed
    /// so endpoint paths can be appended verbatim.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeouts: ApiTimeouts::default(),
        }
    }

    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `BOARD_API_URL`: base URL of the board backend
    ///
    /// Optional:
    /// - `BOARD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BOARD_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingApiUrl`] when `BOARD_API_URL` is unset.
    pub fn from_env() -> Result<Self, BoardError> {
        let base_url = std::env::var(ENV_API_URL)
            .map_err(|_| BoardError::MissingApiUrl { var: ENV_API_URL.into() })?;
        let timeouts = ApiTimeouts {
            request_secs: env_parse_u64("BOARD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BOARD_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
