mod client;

pub use client::VideoChannelsClient;

pub use crate::{
    api::video_channels::VideoChannelsApi,
    error::VideoChannelsError,
};
