//! Response assertions.
//!
//! Every call declares the status it expects and whether the reply must be
//! JSON. A response that does not match turns into a [`VideoChannelsError`]
//! so the calling test fails right there.

use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{unexpected_status, VideoChannelsError};

/// What a response must look like to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub status: u16,
    /// Require a `Content-Type` containing `json`.
    pub json: bool,
}

impl Expectation {
    /// Only the status code is checked.
    pub const fn status(status: u16) -> Self {
        Self { status, json: false }
    }

    /// Status code plus a JSON content type.
    pub const fn json(status: u16) -> Self {
        Self { status, json: true }
    }
}

/// A response that passed its [`Expectation`]. The body is kept as raw bytes.
#[derive(Debug, Clone)]
pub struct ExpectedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl ExpectedResponse {
    /// Decode the body into whatever the caller needs.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, VideoChannelsError> {
        serde_json::from_slice(&self.body).map_err(VideoChannelsError::SerdeError)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

fn is_json(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("json")
}

/// Check a status/content-type/body triple against `expectation`.
pub fn check(
    status: u16,
    content_type: Option<&str>,
    body: Bytes,
    expectation: Expectation,
) -> Result<ExpectedResponse, VideoChannelsError> {
    if status != expectation.status {
        warn!(expected = expectation.status, actual = status, "unexpected status");
        return Err(unexpected_status(expectation.status, status, &body));
    }

    if expectation.json && !content_type.is_some_and(is_json) {
        warn!(?content_type, "expected a JSON response");
        return Err(VideoChannelsError::UnexpectedContentType {
            expected: "json",
            actual: content_type.map(str::to_string),
        });
    }

    Ok(ExpectedResponse {
        status,
        content_type: content_type.map(str::to_string),
        body,
    })
}

/// Read the whole response and run [`check`] on it.
pub async fn verify(
    resp: Response,
    expectation: Expectation,
) -> Result<ExpectedResponse, VideoChannelsError> {
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp.bytes().await.map_err(VideoChannelsError::ReqwestError)?;

    debug!(status, ?content_type, len = body.len(), "received response");

    check(status, content_type.as_deref(), body, expectation)
}
