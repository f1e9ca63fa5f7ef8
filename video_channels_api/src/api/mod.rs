pub mod video_channels;
