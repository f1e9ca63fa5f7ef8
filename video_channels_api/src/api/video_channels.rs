use async_trait::async_trait;
use reqwest::Method;

use crate::{
    client::VideoChannelsClient,
    error::VideoChannelsError,
    expect::{Expectation, ExpectedResponse},
    types::{list_query::ListQuery, video_channel::VideoChannelAttributes},
    util::{build_url, with_query},
};

pub const DEFAULT_LIST_STATUS: u16 = 200;
pub const DEFAULT_ADD_STATUS: u16 = 200;
pub const DEFAULT_UPDATE_STATUS: u16 = 204;
pub const DEFAULT_DELETE_STATUS: u16 = 204;

/// Trait that holds the methods for the video channel endpoints.
///
/// Every method sends exactly one request. `expected_status: None` means the
/// endpoint's usual success code.
#[async_trait]
pub trait VideoChannelsApi {
    /// `GET /api/v1/video-channels`, paginated and optionally sorted.
    async fn get_video_channels_list(
        &self,
        start: u32,
        count: u32,
        sort: Option<&str>,
    ) -> Result<ExpectedResponse, VideoChannelsError>;

    /// `GET /api/v1/accounts/{account_id}/video-channels`.
    async fn get_account_video_channels_list(
        &self,
        account_id: &str,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError>;

    /// Create a channel. Unset attributes fall back to the default name,
    /// description and support text.
    async fn add_video_channel(
        &self,
        token: &str,
        account_id: &str,
        attributes: &VideoChannelAttributes,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError>;

    /// Update a channel, sending only the attributes that are set and non-empty.
    async fn update_video_channel(
        &self,
        token: &str,
        account_id: &str,
        channel_id: &str,
        attributes: &VideoChannelAttributes,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError>;

    async fn delete_video_channel(
        &self,
        token: &str,
        account_id: &str,
        channel_id: &str,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError>;

    /// `GET /api/v1/accounts/{account_id}/video-channels/{channel_id}`.
    async fn get_video_channel(
        &self,
        account_id: &str,
        channel_id: &str,
    ) -> Result<ExpectedResponse, VideoChannelsError>;
}

fn channels_url(base: &str, account_id: &str, channel_id: &str) -> String {
    build_url(
        base,
        &["api", "v1", "accounts", account_id, "video-channels", channel_id],
    )
}

#[async_trait]
impl VideoChannelsApi for VideoChannelsClient {
    async fn get_video_channels_list(
        &self,
        start: u32,
        count: u32,
        sort: Option<&str>,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        let query = ListQuery::new(start, count, sort).to_query_string()?;
        let url = with_query(
            build_url(&self.base_url, &["api", "v1", "video-channels"]),
            &query,
        );

        let req = self.request(Method::GET, &url, None);
        self.send_expecting(req, Expectation::json(DEFAULT_LIST_STATUS))
            .await
    }

    async fn get_account_video_channels_list(
        &self,
        account_id: &str,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        let url = build_url(
            &self.base_url,
            &["api", "v1", "accounts", account_id, "video-channels"],
        );

        let req = self.request(Method::GET, &url, None);
        let status = expected_status.unwrap_or(DEFAULT_LIST_STATUS);
        self.send_expecting(req, Expectation::json(status)).await
    }

    async fn add_video_channel(
        &self,
        token: &str,
        account_id: &str,
        attributes: &VideoChannelAttributes,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        // Empty last segment: the create route is registered with a trailing slash.
        let url = channels_url(&self.base_url, account_id, "");
        let body = attributes.merged_over_defaults();

        let req = self.request(Method::POST, &url, Some(token)).json(&body);
        let status = expected_status.unwrap_or(DEFAULT_ADD_STATUS);
        self.send_expecting(req, Expectation::status(status)).await
    }

    async fn update_video_channel(
        &self,
        token: &str,
        account_id: &str,
        channel_id: &str,
        attributes: &VideoChannelAttributes,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        let url = channels_url(&self.base_url, account_id, channel_id);
        let body = attributes.sparse();

        let req = self.request(Method::PUT, &url, Some(token)).json(&body);
        let status = expected_status.unwrap_or(DEFAULT_UPDATE_STATUS);
        self.send_expecting(req, Expectation::status(status)).await
    }

    async fn delete_video_channel(
        &self,
        token: &str,
        account_id: &str,
        channel_id: &str,
        expected_status: Option<u16>,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        let url = channels_url(&self.base_url, account_id, channel_id);

        let req = self.request(Method::DELETE, &url, Some(token));
        let status = expected_status.unwrap_or(DEFAULT_DELETE_STATUS);
        self.send_expecting(req, Expectation::status(status)).await
    }

    async fn get_video_channel(
        &self,
        account_id: &str,
        channel_id: &str,
    ) -> Result<ExpectedResponse, VideoChannelsError> {
        let url = channels_url(&self.base_url, account_id, channel_id);

        let req = self.request(Method::GET, &url, None);
        self.send_expecting(req, Expectation::json(200)).await
    }
}
