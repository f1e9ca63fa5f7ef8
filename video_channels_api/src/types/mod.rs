pub mod error_types;
pub mod list_query;
pub mod video_channel;

// Re-export the main types commonly used
pub use error_types::ApiError;
pub use list_query::ListQuery;
pub use video_channel::VideoChannelAttributes;
