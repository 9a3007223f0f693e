//! Error taxonomy for board configuration, refresh I/O, and state writes.

/// Errors produced by board state operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The required API base URL environment variable is not set.
    #[error("missing API base URL: env var {var} not set")]
    MissingApiUrl { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the board backend failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The board backend returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The board backend response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// A subtask write referenced a story that is not in local state.
    #[error("story not found: {story_id}")]
    StoryNotFound { story_id: u64 },
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
