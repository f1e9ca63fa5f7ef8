//! # Video Channels API
//!
//! An asynchronous Rust client for the "video channel" endpoints of a
//! video platform's REST API (`/api/v1/video-channels`,
//! `/api/v1/accounts/{id}/video-channels`). It uses `reqwest` for HTTP and
//! checks every response against an expected status code (and JSON content
//! type for reads), so end-to-end suites can drive a live server and fail on
//! the first mismatch.

pub mod api;
pub mod client;
pub mod error;
pub mod expect;
pub mod types;
pub mod util;

pub use client::*;
pub use error::VideoChannelsError;
pub use expect::{Expectation, ExpectedResponse};
pub use types::*;
