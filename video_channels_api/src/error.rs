use thiserror::Error;

use crate::types::error_types::ApiError;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum VideoChannelsError {
    /// HTTP request failed (network or protocol issue).
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// The base URL could not be parsed or is not http(s).
    #[error("Invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid proxy URL `{url}`: {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a different status than the caller expected.
    /// `api_error` holds the server's error body when it parsed as one.
    #[error("Expected HTTP status {expected}, got {actual}, body: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
        api_error: Option<ApiError>,
    },

    #[error("Expected a content type matching `{expected}`, got {actual:?}")]
    UnexpectedContentType {
        expected: &'static str,
        actual: Option<String>,
    },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Query string error: {0}")]
    QueryError(#[from] serde_urlencoded::ser::Error),

    // Other
    #[error("Other error: {0}")]
    Other(String),
}

impl VideoChannelsError {
    /// The actual status code, if this error came from a status mismatch.
    pub fn actual_status(&self) -> Option<u16> {
        match self {
            VideoChannelsError::UnexpectedStatus { actual, .. } => Some(*actual),
            VideoChannelsError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Build an `UnexpectedStatus` error, keeping the server's error body if it
/// is one we understand.
pub fn unexpected_status(expected: u16, actual: u16, bytes: &[u8]) -> VideoChannelsError {
    let api_error = serde_json::from_slice::<ApiError>(bytes)
        .ok()
        .filter(ApiError::is_populated);

    VideoChannelsError::UnexpectedStatus {
        expected,
        actual,
        body: String::from_utf8_lossy(bytes).to_string(),
        api_error,
    }
}
