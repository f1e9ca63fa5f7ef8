//! HTTP client for the video channel endpoints.
//!
//! The client supports an **optional HTTP proxy** used for every request.
//! Supported proxy formats:
//! * `http://USERNAME:PASSWORD@IP:PORT`
//! * `http://IP:PORT`
//! * `IP:PORT` *(treated as `http://IP:PORT`)*

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::error::VideoChannelsError;
use crate::expect::{verify, Expectation, ExpectedResponse};

const USER_AGENT: &str = concat!("video_channels_api/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Main client to interact with the video channel endpoints.
#[derive(Debug, Clone)]
pub struct VideoChannelsClient {
    /// Server root, e.g. `http://localhost:9001`.
    pub base_url: String,
    /// Optional HTTP proxy, normalized to start with `http://` or `https://`.
    pub proxy: Option<String>,

    pub http: Client,
}

impl VideoChannelsClient {
    /// Construct a new [`VideoChannelsClient`].
    ///
    /// # Parameters
    /// * `base_url` – server root; must be an `http` or `https` URL.
    /// * `proxy`    – **Optional** proxy URL, accepted in the formats described
    ///   at the top of this file.
    pub fn new(base_url: String, proxy: Option<String>) -> Result<Self, VideoChannelsError> {
        let parsed = Url::parse(&base_url).map_err(|e| VideoChannelsError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(VideoChannelsError::InvalidBaseUrl {
                url: base_url,
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        let mut builder = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .use_rustls_tls();

        let proxy = proxy.map(|p| normalize_proxy(&p));
        if let Some(ref full) = proxy {
            let req_proxy =
                reqwest::Proxy::all(full).map_err(|source| VideoChannelsError::InvalidProxy {
                    url: full.clone(),
                    source,
                })?;
            builder = builder.proxy(req_proxy);
        }

        let http = builder.build()?;

        Ok(Self {
            base_url,
            proxy,
            http,
        })
    }

    /// Build a request that asks for JSON and, when a token is given,
    /// carries it as a bearer token.
    pub(crate) fn request(&self, method: Method, url: &str, token: Option<&str>) -> RequestBuilder {
        debug!(%method, url, authenticated = token.is_some(), "sending request");

        let req = self
            .http
            .request(method, url)
            .header("Accept", "application/json");

        match token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    /// Send `req` and check the response against `expectation`.
    pub(crate) async fn send_expecting(
        &self,
        req: RequestBuilder,
        expectation: Expectation,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        let resp = req.send().await.map_err(VideoChannelsError::ReqwestError)?;
        verify(resp, expectation).await
    }
}

fn normalize_proxy(p: &str) -> String {
    if p.starts_with("http://") || p.starts_with("https://") {
        p.to_string()
    } else {
        format!("http://{p}")
    }
}
