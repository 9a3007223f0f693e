//! Board REST API client.
//!
//! Thin HTTP wrapper over the two read endpoints the provider refreshes
//! from. Pure parsing is split out of the request path for testability.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, and malformed bodies map to
//! distinct [`BoardError`] variants so the provider can surface "refresh
//! failed" without guessing at the cause.

use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::BoardError;
use crate::model::{Sprint, Story};

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`BoardError::HttpClientBuild`] if the HTTP client fails to
    /// construct.
    pub fn new(config: &ApiConfig) -> Result<Self, BoardError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BoardError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Fetch the active sprint via `GET {base}/board/{board_id}/sprint`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not match `{ "sprint": ... }`.
    pub async fn fetch_sprint(&self, board_id: u64) -> Result<Sprint, BoardError> {
        let url = format!("{}/board/{board_id}/sprint", self.base_url);
        let text = self.get_text(&url).await?;
        parse_sprint_response(&text)
    }

    /// Fetch the stories (with nested subtasks) via `GET {base}/board/{board_id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not match `{ "stories": [...] }`.
    pub async fn fetch_stories(&self, board_id: u64) -> Result<Vec<Story>, BoardError> {
        let url = format!("{}/board/{board_id}", self.base_url);
        let text = self.get_text(&url).await?;
        parse_stories_response(&text)
    }

    async fn get_text(&self, url: &str) -> Result<String, BoardError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BoardError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BoardError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(BoardError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct SprintEnvelope {
    sprint: Sprint,
}

#[derive(serde::Deserialize)]
struct StoriesEnvelope {
    stories: Vec<Story>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_sprint_response(json: &str) -> Result<Sprint, BoardError> {
    let envelope: SprintEnvelope =
        serde_json::from_str(json).map_err(|e| BoardError::ApiParse(e.to_string()))?;
    Ok(envelope.sprint)
}

fn parse_stories_response(json: &str) -> Result<Vec<Story>, BoardError> {
    let envelope: StoriesEnvelope =
        serde_json::from_str(json).map_err(|e| BoardError::ApiParse(e.to_string()))?;
    Ok(envelope.stories)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
